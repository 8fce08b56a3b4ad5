//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Seed for the computer opponent. Random per run when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the how-to-play guide on start.
    #[serde(default = "default_show_guide")]
    show_guide: bool,

    /// Prompt for the first command.
    #[serde(default = "default_command_prompt")]
    command_prompt: String,
}

fn default_show_guide() -> bool {
    true
}

fn default_command_prompt() -> String {
    "👉 ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_guide: default_show_guide(),
            command_prompt: default_command_prompt(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the seed when `seed` is given.
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(*config.seed(), None);
        assert!(*config.show_guide());
        assert_eq!(config.command_prompt(), "👉 ");
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 99").unwrap();
        let config = ShellConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(99));
        assert!(*config.show_guide());
    }

    #[test]
    fn test_from_file_full() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_guide = false\ncommand_prompt = \"> \"").unwrap();
        let config = ShellConfig::from_file(file.path()).unwrap();
        assert!(!*config.show_guide());
        assert_eq!(config.command_prompt(), "> ");
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();
        let err = ShellConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_seed_override() {
        let config = ShellConfig::default().with_seed_override(Some(5));
        assert_eq!(*config.seed(), Some(5));
        let config = config.with_seed_override(None);
        assert_eq!(*config.seed(), Some(5));
    }
}
