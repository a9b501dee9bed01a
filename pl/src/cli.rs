//! CLI argument parsing for prompt-library

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reusable prompt templates
#[derive(Parser, Debug)]
#[command(
    name = "prompt-library",
    version,
    about = "📚 Reusable prompt templates",
    after_help = "Use: prompt-library get <id> | prompt-library use <id> --var key=value"
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the library file (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub library: Option<PathBuf>,

    /// JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all prompts
    List,

    /// Show a prompt template
    Get {
        /// Prompt ID
        id: String,
    },

    /// Render a prompt with variables
    Use {
        /// Prompt ID
        id: String,

        /// Variable: key=value
        #[arg(short, long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },

    /// Search prompts
    Search {
        /// Search query
        query: String,
    },

    /// Add a new prompt
    Add {
        /// Prompt ID (slug)
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Category
        #[arg(short, long, default_value = crate::DEFAULT_CATEGORY)]
        category: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Template text (or pipe via stdin)
        #[arg(long)]
        template: Option<String>,
    },

    /// Remove a prompt
    Remove {
        /// Prompt ID
        id: String,
    },

    /// List all tags
    Tags,

    /// Export library
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Import prompts
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// Reset library to built-in defaults
    Reset,
}

impl Command {
    /// Whether the command rewrites the library document
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Remove { .. } | Self::Import { .. } | Self::Reset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_use_with_repeated_vars() {
        let cli = Cli::parse_from(["prompt-library", "use", "bug-fix", "-v", "code=x", "--var", "error=boom"]);
        assert_eq!(
            cli.command,
            Some(Command::Use {
                id: "bug-fix".to_string(),
                vars: vec!["code=x".to_string(), "error=boom".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_add_defaults() {
        let cli = Cli::parse_from(["prompt-library", "add", "mine", "--name", "Mine"]);
        match cli.command {
            Some(Command::Add {
                category, tags, template, ..
            }) => {
                assert_eq!(category, "other");
                assert_eq!(tags, "");
                assert!(template.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_name() {
        assert!(Cli::try_parse_from(["prompt-library", "add", "mine"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["prompt-library", "get", "refactor", "--json", "--library", "/tmp/p.json"]);
        assert!(cli.json);
        assert_eq!(cli.library, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn test_mutating_commands() {
        assert!(Command::Reset.mutates());
        assert!(Command::Remove { id: "x".to_string() }.mutates());
        assert!(!Command::List.mutates());
        assert!(!Command::Tags.mutates());
    }
}
