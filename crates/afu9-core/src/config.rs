// Rust guideline compliant 2026-10-16

//! Configuration management for AFU-9 tooling.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name (`json`, `table`, `plain`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// Minimum level of emitted log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational events.
    Info,
    /// Debug events.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Parses a level name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for AFU-9 tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Minimum log level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Batch size above which issues are evaluated in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

/// Default parallel evaluation threshold.
fn default_parallel_threshold() -> usize {
    1_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_level: LogLevel::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `AFU9_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `config.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `AFU9_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `AFU9_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `AFU9_PARALLEL_THRESHOLD` - Parallel evaluation threshold
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("AFU9_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::Config("AFU9_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("AFU9_LOG_LEVEL") {
            self.log_level = LogLevel::parse(&val).ok_or_else(|| {
                Error::Config(
                    "AFU9_LOG_LEVEL must be error, warn, info, debug, or trace".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("AFU9_PARALLEL_THRESHOLD") {
            self.parallel_threshold = val.parse().map_err(|_| {
                Error::Config("AFU9_PARALLEL_THRESHOLD must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `parallel_threshold` is zero.
    fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::Config(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
