//! Configuration for prompt-library

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local config file
const LOCAL_CONFIG: &str = ".prompt-library.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the library document
    #[serde(rename = "library-file")]
    pub library_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Hold an exclusive file lock while a command mutates the library
    pub lock: bool,
}

fn default_library_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".prompt-library")
        .join("prompts.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            log_level: None,
            lock: true,
        }
    }
}

impl Config {
    /// Config file to read: the explicit path, else `./.prompt-library.yml`,
    /// else `~/.config/prompt-library/prompt-library.yml`, whichever exists first.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let user_config = dirs::config_dir().map(|d| d.join("prompt-library").join("prompt-library.yml"));
        [Some(PathBuf::from(LOCAL_CONFIG)), user_config]
            .into_iter()
            .flatten()
            .find(|p| p.exists())
    }

    /// Load the located config file, or defaults when there is none.
    ///
    /// Runs before logging is set up, so a file that exists but does not
    /// parse is returned as an error rather than logged and skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load_from_file(&path).context(format!("Failed to load config from {}", path.display())),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        serde_yaml::from_str(&content).context("Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.library_file.ends_with(".prompt-library/prompts.json"));
        assert!(config.log_level.is_none());
        assert!(config.lock);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "library-file: /tmp/elsewhere.json\nlog-level: debug\nlock: false\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.library_file, PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(!config.lock);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "log-level: warn\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.library_file, default_library_file());
        assert!(config.lock);
    }

    #[test]
    fn test_explicit_path_is_located_even_if_missing() {
        let path = Path::new("/nonexistent/prompt-library.yml");
        assert_eq!(Config::locate(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "lock: [not, a, bool]\n").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("config.yml"));
    }
}
