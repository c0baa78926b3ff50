//! Configuration management for the sizer.
//!
//! This module provides configuration handling with:
//! - YAML file support
//! - Programmatic builder overrides
//! - Validation and defaults

use crate::core::{Result, SizerError};
use crate::sizer::{Sizer, SizerType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sizer selection
    pub sizer: SizerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Sizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizerConfig {
    /// Unit batches are measured in
    pub kind: SizerType,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Full `EnvFilter` directive, takes precedence over `level`
    pub filter: Option<String>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LogLevel::Info,
            filter: None,
        }
    }
}

impl LogLevel {
    /// Convert to tracing filter string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl LoggingConfig {
    /// Filter directive this configuration resolves to
    pub fn directive(&self) -> &str {
        self.filter.as_deref().unwrap_or(self.level.as_str())
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Result<Self> {
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                return Err(SizerError::config("logging.filter must not be empty"));
            }
            tracing_subscriber::EnvFilter::try_new(filter).map_err(|e| {
                SizerError::config(format!("Invalid logging filter '{}': {}", filter, e))
            })?;
        }

        Ok(())
    }

    /// Build the sizer this configuration selects
    pub fn build_sizer(&self) -> Sizer {
        Sizer::new(self.sizer.kind)
    }
}

/// Configuration builder for programmatic construction
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    /// Load configuration from YAML string
    pub fn from_yaml(mut self, yaml: &str) -> Result<Self> {
        self.config = serde_yaml::from_str(yaml)
            .map_err(|e| SizerError::config(format!("Failed to parse YAML config: {}", e)))?;
        Ok(self)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        self.from_yaml(&content)
    }

    /// Set the sizer kind
    pub fn sizer(mut self, kind: SizerType) -> Self {
        self.config.sizer.kind = kind;
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set a full log filter directive
    pub fn log_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.config.logging.filter = Some(filter.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
