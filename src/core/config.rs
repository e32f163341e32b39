//! Application configuration management
//!
//! This module handles loading configuration from a TOML file, with an
//! environment fallback for the API credential. A missing credential is a
//! recognized state handled at request time, never a load failure.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::constants::model;

/// Environment variable consulted when the config file carries no API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default service base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, Deserialize, Default)]
struct GeminiSection {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    request_timeout: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct ModelsSection {
    #[serde(default = "default_primary_model")]
    primary: String,
    #[serde(default = "default_fallback_model")]
    fallback: String,
}

impl Default for ModelsSection {
    fn default() -> Self {
        Self {
            primary: default_primary_model(),
            fallback: default_fallback_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    gemini: GeminiSection,
    #[serde(default)]
    models: ModelsSection,
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_primary_model() -> String {
    model::PRIMARY.to_string()
}

fn default_fallback_model() -> String {
    model::FALLBACK.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolved application configuration
///
/// The credential may be absent; the explanation requester answers such calls
/// with a fixed message instead of touching the network.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the generative language service, if configured
    pub api_key: Option<String>,

    /// Service base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Logging level
    pub log_level: String,

    /// Model candidates, tried strictly in order
    pub models: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the TOML file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from environment and config file
    ///
    /// Looks for the file named by `CONFIG_PATH` (default `config.toml`).
    /// An absent file yields pure defaults rather than an error.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        if Path::new(&config_path).exists() {
            Self::from_file(config_path)
        } else {
            Self::from_toml_str("")
        }
    }

    fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        Ok(Self::resolve(config, std::env::var(API_KEY_ENV).ok()))
    }

    /// The file's key wins; the environment only fills a gap. Empty strings
    /// count as absent.
    fn resolve(config: TomlConfig, env_key: Option<String>) -> Self {
        let api_key = config
            .gemini
            .api_key
            .or(env_key)
            .filter(|key| !key.is_empty());

        Config {
            api_key,
            base_url: config
                .gemini
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: config
                .gemini
                .request_timeout
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            log_level: config.log_level,
            models: vec![config.models.primary, config.models.fallback],
        }
    }

    /// Whether a credential is available for outbound requests
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            log_level = "debug"

            [gemini]
            api_key = "test-key-123"
            base_url = "http://localhost:8089"
            request_timeout = 10

            [models]
            primary = "model-a"
            fallback = "model-b"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("test-key-123"));
        assert_eq!(config.base_url, "http://localhost:8089");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.models, vec!["model-a", "model-b"]);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_defaults_when_file_empty() {
        let empty: TomlConfig = toml::from_str("").unwrap();
        let config = Config::resolve(empty, None);
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.models, vec![model::PRIMARY, model::FALLBACK]);
    }

    #[test]
    fn test_env_key_fills_missing_file_key() {
        let empty: TomlConfig = toml::from_str("").unwrap();
        let config = Config::resolve(empty, Some("env-key".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_file_key_wins_over_env() {
        let parsed: TomlConfig = toml::from_str(
            r#"
            [gemini]
            api_key = "file-key"
        "#,
        )
        .unwrap();
        let config = Config::resolve(parsed, Some("env-key".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_empty_key_treated_as_missing() {
        let empty: TomlConfig = toml::from_str("").unwrap();
        let config = Config::resolve(empty, Some(String::new()));
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
    }
}
