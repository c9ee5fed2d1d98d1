// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::standard(load_default)
//!   [envstore.toml]        optional, skipped when absent
//!   .add_file(--config)    required, in command-line order
//!   ENVSTORE_* vars        always above the files
//!   .set(...)              CLI overrides, above everything
//!        |
//!        v
//!   build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::Result;

/// One configuration layer, as listed by `envstore configs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The working-directory config file, present on disk.
    Default(PathBuf),
    /// A file named on the command line.
    File(PathBuf),
    /// TOML text passed in directly.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "default {}", path.display()),
            Self::File(path) => write!(f, "file    {}", path.display()),
            Self::Inline => f.write_str("inline"),
        }
    }
}

/// Collects configuration layers and builds a [`Config`] from them.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    sources: Vec<ConfigSource>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// An empty loader: defaults only, no environment variables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
            env_prefix: None,
        }
    }

    /// The loader the binary starts from: `envstore.toml` in the working
    /// directory (unless `load_default_file` is false) and `ENVSTORE_*`
    /// environment variables.
    #[must_use]
    pub fn standard(load_default_file: bool) -> Self {
        let loader = Self::new().with_env_prefix(ENV_PREFIX);
        if load_default_file {
            loader.add_default_file(DEFAULT_CONFIG_FILE)
        } else {
            loader
        }
    }

    /// Adds an optional file; it is only listed as a source if it exists.
    #[must_use]
    pub fn add_default_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources.push(ConfigSource::Default(path.to_path_buf()));
        }
        self
    }

    /// Adds a file that must exist and parse; `build()` fails otherwise.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_inline(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key (`store.file`) above every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid configuration path.
    pub fn set(mut self, key: &str, value: impl Into<config::Value>) -> Result<Self> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a layer is not valid
    /// TOML, a value has the wrong type or an unknown key, or validation
    /// rejects the merged config.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        let mut config: Config = builder.build()?.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
