//! Command handlers
//!
//! Every command is one transaction over the library document: load it,
//! run the handler, and save it again only when the command mutates it.
//! Handlers write to the supplied writers so they can be driven from tests.

use colored::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::builtin;
use crate::cli::Command;
use crate::error::LibraryError;
use crate::format;
use crate::library::{Library, Template};
use crate::render::render;
use crate::store::TemplateStore;

/// Switches that apply to every command
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    /// Structured output for `list` and `get`
    pub json: bool,
    /// Hold the store lock around mutating commands
    pub lock: bool,
}

/// Summary row of the structured `list` output
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
}

/// Run one command against `store`
pub fn dispatch<W: Write, E: Write>(
    store: &TemplateStore,
    options: DispatchOptions,
    command: Command,
    out: &mut W,
    err: &mut E,
) -> Result<(), LibraryError> {
    debug!(?command, "dispatch: called");

    let _lock = if options.lock && command.mutates() {
        Some(store.lock()?)
    } else {
        None
    };

    let mut library = store.load()?;

    match command {
        Command::List => list(&library, options.json, out),
        Command::Get { id } => get(&library, &id, options.json, out),
        Command::Use { id, vars } => use_template(&library, &id, &parse_vars(&vars), out, err),
        Command::Search { query } => search(&library, &query, out),
        Command::Add {
            id,
            name,
            category,
            tags,
            template,
        } => {
            let template = template.filter(|t| !t.is_empty()).ok_or(LibraryError::MissingTemplate)?;
            let record = Template {
                id,
                name,
                category,
                tags: parse_tags(&tags),
                template,
            };
            add(store, &mut library, record, out)
        }
        Command::Remove { id } => remove(store, &mut library, &id, out),
        Command::Tags => tags(&library, out),
        Command::Export { file } => export(&library, file.as_deref(), out),
        Command::Import { file } => import(store, &mut library, &file, out),
        Command::Reset => reset(store, out),
    }
}

/// Parse `key=value` bindings. Later bindings for a key override earlier ones.
pub fn parse_vars(raw: &[String]) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = Vec::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            warn!(%entry, "Ignoring variable without '='");
            continue;
        };

        let (key, value) = (key.trim().to_string(), value.trim().to_string());
        match vars.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => vars.push((key, value)),
        }
    }
    vars
}

/// Split a comma-separated tag list, trimming and dropping empties
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn find<'a>(library: &'a Library, id: &str) -> Result<&'a Template, LibraryError> {
    library.find(id).ok_or_else(|| LibraryError::NotFound { id: id.to_string() })
}

fn list<W: Write>(library: &Library, json: bool, out: &mut W) -> Result<(), LibraryError> {
    if json {
        let entries: Vec<ListEntry> = library
            .templates()
            .iter()
            .map(|t| ListEntry {
                id: &t.id,
                name: &t.name,
                category: &t.category,
            })
            .collect();
        writeln!(out, "{}", to_json(&entries)?)?;
    } else {
        writeln!(out, "{}", format::prompt_list(library.templates()))?;
    }
    Ok(())
}

fn get<W: Write>(library: &Library, id: &str, json: bool, out: &mut W) -> Result<(), LibraryError> {
    let template = find(library, id)?;
    if json {
        writeln!(out, "{}", to_json(template)?)?;
    } else {
        writeln!(out, "{}", format::prompt_detail(template))?;
    }
    Ok(())
}

fn use_template<W: Write, E: Write>(
    library: &Library,
    id: &str,
    vars: &[(String, String)],
    out: &mut W,
    err: &mut E,
) -> Result<(), LibraryError> {
    let template = find(library, id)?;
    let rendered = render(&template.template, vars);

    if !rendered.unresolved.is_empty() {
        writeln!(
            err,
            "{}",
            format!("Warning: unset variables: {}", rendered.unresolved.join(", ")).yellow()
        )?;
    }
    writeln!(out, "{}", rendered.text)?;
    Ok(())
}

fn search<W: Write>(library: &Library, query: &str, out: &mut W) -> Result<(), LibraryError> {
    let matches = library.search(query);
    debug!(%query, count = matches.len(), "search: done");

    if matches.is_empty() {
        writeln!(out, "No prompts matching '{}'", query)?;
    } else {
        writeln!(out, "{}", format::prompt_list(matches))?;
    }
    Ok(())
}

fn add<W: Write>(store: &TemplateStore, library: &mut Library, record: Template, out: &mut W) -> Result<(), LibraryError> {
    let id = record.id.clone();
    library.upsert(record);
    store.save(library)?;

    info!(%id, "Added prompt");
    writeln!(out, "{}", format!("✓ Added '{}'", id).green())?;
    Ok(())
}

fn remove<W: Write>(store: &TemplateStore, library: &mut Library, id: &str, out: &mut W) -> Result<(), LibraryError> {
    if library.remove(id) {
        store.save(library)?;
        info!(%id, "Removed prompt");
        writeln!(out, "{}", format!("✓ Removed '{}'", id).green())?;
    } else {
        writeln!(out, "Prompt '{}' not found.", id)?;
    }
    Ok(())
}

fn tags<W: Write>(library: &Library, out: &mut W) -> Result<(), LibraryError> {
    for (tag, count) in library.tag_counts() {
        writeln!(out, "{}", format::tag_line(&tag, count))?;
    }
    Ok(())
}

fn export<W: Write>(library: &Library, file: Option<&Path>, out: &mut W) -> Result<(), LibraryError> {
    let content = to_json(library)?;
    match file {
        Some(path) => {
            fs::write(path, content).map_err(|e| LibraryError::io(path, e))?;
            info!(path = %path.display(), count = library.len(), "Exported library");
            writeln!(out, "Exported {} prompts to {}", library.len(), path.display())?;
        }
        None => writeln!(out, "{}", content)?,
    }
    Ok(())
}

fn import<W: Write>(store: &TemplateStore, library: &mut Library, file: &Path, out: &mut W) -> Result<(), LibraryError> {
    let content = fs::read_to_string(file).map_err(|e| LibraryError::io(file, e))?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| LibraryError::json(file, e))?;
    let serde_json::Value::Array(candidates) = value else {
        return Err(LibraryError::InvalidImport {
            path: file.to_path_buf(),
        });
    };

    let report = library.import(candidates);
    store.save(library)?;
    info!(?report, path = %file.display(), "Imported prompts");

    let mut message = format!(
        "✓ Imported {} new prompts ({} duplicates skipped",
        report.added, report.duplicates
    );
    if report.invalid > 0 {
        message.push_str(&format!(", {} without a valid id", report.invalid));
    }
    message.push(')');
    writeln!(out, "{}", message.green())?;
    Ok(())
}

fn reset<W: Write>(store: &TemplateStore, out: &mut W) -> Result<(), LibraryError> {
    let library = builtin::catalog();
    store.save(&library)?;

    info!("Library reset to built-in prompts");
    writeln!(
        out,
        "{}",
        format!("✓ Library reset to {} built-in prompts", library.len()).green()
    )?;
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LibraryError> {
    serde_json::to_string_pretty(value).map_err(|e| LibraryError::Output(e.into()))
}
