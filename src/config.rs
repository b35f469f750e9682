//! Configuration management for Cinesearch
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{CinesearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result kinds the remote API can filter on
const VALID_RESULT_TYPES: [&str; 3] = ["movie", "series", "episode"];

/// Main configuration structure for Cinesearch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote movie database settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Search session behavior
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote movie database API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OMDb-compatible API
    ///
    /// Pointing this at a mock server is how the integration tests exercise
    /// the client.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `apikey` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Optional result kind filter (`movie`, `series`, `episode`)
    #[serde(default)]
    pub result_type: Option<String>,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
            result_type: None,
        }
    }
}

/// Search session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Query used on startup and whenever the submitted term is blank
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Caption shown while the default query is active
    #[serde(default = "default_label")]
    pub default_label: String,
}

fn default_query() -> String {
    "star-wars".to_string()
}

fn default_label() -> String {
    "Star Wars franchise".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_query: default_query(),
            default_label: default_label(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment variables, and CLI overrides
    ///
    /// A missing file is not an error: defaults are used and a warning is
    /// logged. Environment variables win over the file and CLI flags win
    /// over both.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CinesearchError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CinesearchError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(api_key) = std::env::var("CINESEARCH_API_KEY") {
            self.api.api_key = api_key;
        }

        if let Ok(base_url) = std::env::var("CINESEARCH_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("CINESEARCH_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid CINESEARCH_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(query) = std::env::var("CINESEARCH_DEFAULT_QUERY") {
            self.search.default_query = query;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(api_key) = &cli.api_key {
            self.api.api_key = api_key.clone();
        }
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CinesearchError::Config("api.base_url cannot be empty".to_string()).into());
        }

        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(CinesearchError::Config(format!(
                "Invalid api.base_url '{}': {}",
                self.api.base_url, e
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(CinesearchError::Config(
                "api.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.api.timeout_seconds > 300 {
            return Err(CinesearchError::Config(
                "api.timeout_seconds must be less than or equal to 300".to_string(),
            )
            .into());
        }

        if let Some(kind) = &self.api.result_type {
            if !VALID_RESULT_TYPES.contains(&kind.as_str()) {
                return Err(CinesearchError::Config(format!(
                    "Invalid api.result_type: {}. Must be one of: {}",
                    kind,
                    VALID_RESULT_TYPES.join(", ")
                ))
                .into());
            }
        }

        if self.search.default_query.trim().is_empty() {
            return Err(CinesearchError::Config(
                "search.default_query cannot be empty".to_string(),
            )
            .into());
        }

        if self.api.api_key.is_empty() {
            tracing::warn!("No API key configured; the remote API will likely reject requests");
        }

        Ok(())
    }
}
