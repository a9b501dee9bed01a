//! prompt-library - reusable prompt templates for AI agents
//!
//! CLI entry point: resolves configuration, then runs one command against the library.

use std::io::{self, IsTerminal, Read};

use clap::{CommandFactory, Parser};
use eyre::{Context, Result};
use tracing::debug;

use promptlibrary::TemplateStore;
use promptlibrary::cli::{Cli, Command};
use promptlibrary::commands::{self, DispatchOptions};
use promptlibrary::config::Config;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

/// Template text piped on stdin, if stdin is not a terminal
fn read_piped_input() -> Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buf = String::new();
    stdin.read_to_string(&mut buf).context("Failed to read template from stdin")?;
    Ok(Some(buf))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging needs the config's level, but a bad config is reported only once logging is up
    let config = Config::load(cli.config.as_deref());
    let config_log_level = config.as_ref().ok().and_then(|c| c.log_level.clone());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = config.context("Failed to load configuration")?;
    let library_file = cli.library.clone().unwrap_or(config.library_file);
    debug!(library_file = %library_file.display(), "main: resolved library file");

    let Some(mut command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Command::Add { template, .. } = &mut command
        && template.as_deref().is_none_or(str::is_empty)
    {
        *template = read_piped_input()?;
    }

    let store = TemplateStore::open(&library_file);
    let options = DispatchOptions {
        json: cli.json,
        lock: config.lock,
    };

    commands::dispatch(&store, options, command, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}
