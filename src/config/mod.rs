//! Configuration module for tarpick
//!
//! Settings are layered: the user config file
//! (`~/.config/tarpick/config.toml` on Linux), then `tarpick.toml` in the
//! working directory, then `TARPICK_*` environment variables. Every source
//! is optional and nothing is ever written back.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::extract::tar::DEFAULT_PROGRAM;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "tarpick.toml";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TarpickConfig {
    /// Program invoked to extract archives
    pub extractor: String,

    /// Ask the extractor to list files as it extracts them
    pub verbose_extract: bool,

    /// Upper bound on each prompt retry loop, 0 for no limit
    pub max_attempts: usize,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for TarpickConfig {
    fn default() -> Self {
        Self {
            extractor: DEFAULT_PROGRAM.to_string(),
            verbose_extract: true,
            max_attempts: 5,
            quiet: false,
        }
    }
}

impl TarpickConfig {
    /// Get the path to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tarpick").join("config.toml"))
    }

    /// Load the layered configuration for a session in `work_dir`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file or variable cannot be parsed.
    pub fn load(work_dir: &Path) -> Result<Self, ConfigError> {
        let mut files = Vec::new();
        match Self::config_path() {
            Ok(path) => files.push(path),
            Err(e) => log::debug!("Skipping user config: {e}"),
        }
        files.push(work_dir.join(LOCAL_CONFIG_FILE));

        let settings = Self::file_sources(&files)
            .add_source(Environment::with_prefix("TARPICK").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from the given files only, later files win
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file cannot be parsed.
    pub fn from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::file_sources(files).build()?.try_deserialize()
    }

    fn file_sources(files: &[PathBuf]) -> config::ConfigBuilder<config::builder::DefaultState> {
        files.iter().fold(Config::builder(), |builder, path| {
            builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
        })
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
