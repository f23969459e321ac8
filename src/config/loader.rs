use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/moviefinder/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("moviefinder").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The searching placeholder is not blank
    /// - Every catalog title is non-blank and unique (ignoring case)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.searching_placeholder.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "screen.searching_placeholder must not be blank".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.catalog.movies {
            let key = entry.title.trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Catalog movies must have a title".to_string(),
                });
            }
            if !seen.insert(key) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate catalog title '{}'", entry.title),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{CatalogEntry, DEFAULT_SEARCHING_PLACEHOLDER};

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.screen.searching_placeholder,
            DEFAULT_SEARCHING_PLACEHOLDER
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("moviefinder/config.toml"));
    }

    #[test]
    fn blank_placeholder_is_rejected() {
        let mut config = Config::default();
        config.screen.searching_placeholder = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let mut config = Config::default();
        config.catalog.movies.push(CatalogEntry {
            title: "heat".to_string(),
            rating_summary: String::new(),
            poster_url: String::new(),
        });
        let err = config.validate().expect_err("duplicate");
        assert!(err.to_string().contains("Duplicate catalog title"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/moviefinder.toml"))
            .expect("defaults");
        assert_eq!(config, Config::default());
    }
}
