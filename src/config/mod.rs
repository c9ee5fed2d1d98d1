// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for the `envstore` tool.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envstore.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVSTORE_* env vars
//! 5. CLI overrides (--file, --log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVSTORE_STORE__FILE=prod.env   → store.file = "prod.env"
//! ENVSTORE_GLOBAL__LOG_LEVEL=4    → global.log_level = 4
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::ConfigLoader;
pub use loader::ConfigSource;

/// Name of the optional configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envstore.toml";

/// Prefix of the `<PREFIX>_<SECTION>__<KEY>` environment overrides.
pub const ENV_PREFIX: &str = "ENVSTORE";

/// Env file used when nothing else is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Env file options.
    pub store: StoreConfig,
}

/// `[global]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// Optional log file, written at trace level.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            log_file: None,
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Path of the env file the commands operate on.
    pub file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dotenv_store::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_default_file("envstore.toml")
    ///     .with_env_prefix("ENVSTORE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_inline(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `store.file` is empty.
    pub fn resolve_and_validate(&mut self) -> std::result::Result<(), ConfigError> {
        if self.store.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "store".to_string(),
                key: "file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self
            .global
            .log_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.global.log_file = None;
        }
        Ok(())
    }

    /// Formats all options as aligned `key = value` lines.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "store.file".to_string(),
            self.store.file.display().to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
