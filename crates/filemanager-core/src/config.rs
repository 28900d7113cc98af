//! Process configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Environment variable naming the base directory.
pub const BASE_DIR_VAR: &str = "FILE_MANAGER_BASE_DIR";

/// Environment variable naming the log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The log level name is not recognized.
    #[error("Invalid log level: {level:?}")]
    InvalidLogLevel { level: String },
}

/// Configuration loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Root under which every logical path is resolved.
    #[builder(default = "PathBuf::from(\".\")")]
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Log level name; empty means the default level.
    #[builder(default)]
    #[serde(default)]
    pub log_level: String,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref base_dir) = self.base_dir {
            if base_dir.as_os_str().is_empty() {
                return Err("Base directory cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Config {
    /// Create a new config builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Create a config rooted at `base_dir` with the default log level.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            log_level: String::new(),
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// An unset or empty base directory falls back to the current directory.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = lookup(BASE_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_base_dir);

        Self {
            base_dir,
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or_default(),
        }
    }

    /// Parse the configured log level into a tracing filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        let level = self.log_level.trim();
        if level.is_empty() {
            return Ok(LevelFilter::INFO);
        }

        match level.to_ascii_lowercase().as_str() {
            "trace" => Ok(LevelFilter::TRACE),
            "debug" => Ok(LevelFilter::DEBUG),
            "info" => Ok(LevelFilter::INFO),
            "warn" | "warning" => Ok(LevelFilter::WARN),
            "error" => Ok(LevelFilter::ERROR),
            "off" => Ok(LevelFilter::OFF),
            _ => Err(ConfigError::InvalidLogLevel {
                level: self.log_level.clone(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
