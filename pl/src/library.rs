//! Template records and the ordered library that holds them

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// A single named prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique slug-like identifier
    pub id: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default = "default_category", deserialize_with = "null_as_default_category")]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Body containing zero or more `{{name}}` placeholders
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: String,
}

fn default_category() -> String {
    crate::DEFAULT_CATEGORY.to_string()
}

// An explicit `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

impl Template {
    /// Case-insensitive substring match against id, name, body and tags.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.template.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Outcome of merging an import file into the library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records appended to the library
    pub added: usize,
    /// Records skipped because their id already exists
    pub duplicates: usize,
    /// Records skipped because they have no usable id or do not parse
    pub invalid: usize,
}

/// Ordered collection of templates, persisted as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    templates: Vec<Template>,
}

impl Library {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// First template whose id matches exactly
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Remove any template with the same id, then append. Replaces, never merges.
    pub fn upsert(&mut self, template: Template) {
        debug!(id = %template.id, "Library::upsert: called");
        self.templates.retain(|t| t.id != template.id);
        self.templates.push(template);
    }

    /// Remove every template with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        self.templates.len() < before
    }

    /// Templates matching `query` case-insensitively, in library order
    pub fn search(&self, query: &str) -> Vec<&Template> {
        let needle = query.to_lowercase();
        self.templates.iter().filter(|t| t.matches(&needle)).collect()
    }

    /// Templates grouped by category; categories sorted, insertion order within each
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&Template>> {
        group_by_category(self.templates.iter())
    }

    /// Tag occurrence counts, highest count first, ties in lexical order
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in self.templates.iter().flat_map(|t| t.tags.iter()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }

        let mut counts: Vec<(String, usize)> = counts.into_iter().map(|(tag, n)| (tag.to_string(), n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Append candidates whose id is non-empty and not yet present.
    ///
    /// Ids accepted earlier in the same batch count as present, so the
    /// library never ends up with two records sharing an id.
    pub fn import(&mut self, candidates: Vec<serde_json::Value>) -> ImportReport {
        let mut report = ImportReport::default();
        let mut known: HashSet<String> = self.templates.iter().map(|t| t.id.clone()).collect();

        for candidate in candidates {
            let id = match candidate.get("id").and_then(|v| v.as_str()) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    debug!("Library::import: candidate has no id, skipping");
                    report.invalid += 1;
                    continue;
                }
            };

            if known.contains(&id) {
                debug!(%id, "Library::import: duplicate id, skipping");
                report.duplicates += 1;
                continue;
            }

            match serde_json::from_value::<Template>(candidate) {
                Ok(template) => {
                    known.insert(id);
                    self.templates.push(template);
                    report.added += 1;
                }
                Err(e) => {
                    debug!(%id, error = %e, "Library::import: candidate does not parse, skipping");
                    report.invalid += 1;
                }
            }
        }

        report
    }
}

/// Group any sequence of templates by category, keeping their relative order
pub(crate) fn group_by_category<'a>(templates: impl IntoIterator<Item = &'a Template>) -> BTreeMap<&'a str, Vec<&'a Template>> {
    let mut groups: BTreeMap<&str, Vec<&Template>> = BTreeMap::new();
    for template in templates {
        groups.entry(template.category.as_str()).or_default().push(template);
    }
    groups
}

impl FromIterator<Template> for Library {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
