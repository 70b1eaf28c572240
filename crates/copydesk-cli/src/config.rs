//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use copydesk_llm::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration, stored at `~/.copydesk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API key. An empty key is kept; requests fail when sent.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the Gemini API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON for piping into other tools
    Json,
    /// Bare values only
    Quiet,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Directory holding the config file, state file, and REPL history
    pub fn data_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(".copydesk"))
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    /// Path to the persisted application state
    pub fn state_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("state.json"))
    }

    /// Path to the interactive session history
    pub fn history_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("history.txt"))
    }

    /// Load the configuration from disk, or defaults if the file is missing
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save the configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config {
            api_key: "test-key".to_string(),
            base_url: "http://localhost:9999".to_string(),
            settings: Settings {
                color: false,
                format: OutputFormat::Json,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api_key, "test-key");
        assert_eq!(parsed.base_url, "http://localhost:9999");
        assert!(!parsed.settings.color);
        assert_eq!(parsed.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("api_key = \"abc\"").unwrap();
        assert_eq!(parsed.api_key, "abc");
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
        assert_eq!(parsed.settings.format, OutputFormat::Table);
    }
}
