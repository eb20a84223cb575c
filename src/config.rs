//! Configuration management for the resource inspector
//!
//! Settings come from built-in defaults, an optional `modres.toml` in the
//! working directory and `MODRES_*` environment variables, in that order.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::tree::LoadOptions;

const CONFIG_FILE: &str = "modres";
const ENV_PREFIX: &str = "MODRES";
const MAX_FILE_SIZE_KB: u64 = u64::MAX / 1024;
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Inspector configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InspectorConfig {
    /// Directory whose contents become the resource tree
    /// Environment: MODRES_SOURCE_DIR
    pub source_dir: String,

    /// Default log filter, overridden by RUST_LOG
    /// Environment: MODRES_LOG_LEVEL
    pub log_level: String,

    /// Largest file accepted into the tree, in KiB
    /// Environment: MODRES_MAX_FILE_SIZE_KB
    pub max_file_size_kb: u64,

    /// Suffixes of files flagged as compressed (TOML only)
    pub compressed_suffixes: Vec<String>,
}

impl InspectorConfig {
    /// Load configuration from `modres.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::finish(settings)
    }

    /// Load configuration from one explicit file over the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let settings = Self::with_defaults()?
            .add_source(File::from(path))
            .build()?;
        Self::finish(settings)
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("source_dir", "./resources")?
            .set_default("log_level", "info")?
            .set_default("max_file_size_kb", 4096)?
            .set_default("compressed_suffixes", vec!["gz", "z"])
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let config: InspectorConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.trim().is_empty() {
            return Err(ConfigError::Message("source_dir cannot be empty".into()));
        }

        if self.max_file_size_kb == 0 {
            return Err(ConfigError::Message(
                "max_file_size_kb must be greater than 0".into(),
            ));
        }

        if self.max_file_size_kb > MAX_FILE_SIZE_KB {
            return Err(ConfigError::Message(format!(
                "max_file_size_kb cannot exceed {}",
                MAX_FILE_SIZE_KB
            )));
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Message(format!(
                "log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }

    /// Get source directory as PathBuf
    pub fn source_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.source_dir)
    }

    /// Get maximum file size in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_kb.saturating_mul(1024)
    }

    /// Options for loading the source directory
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            compressed_suffixes: self.compressed_suffixes.clone(),
            max_file_size: self.max_file_size_bytes(),
        }
    }
}
