// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for the `envstore` binary.
//!
//! ```text
//! global.log_level --> LogLevel --> EnvFilter directive
//!                                        |
//!  registry <-- stderr layer (no timestamps) <-+
//!           <-- log file layer (trace, non-blocking, optional)
//!
//!  0 off   1 error   2 warn   3 info   4 debug   5 trace   6 trace (+deps)
//! ```
//!
//! The store emits one `trace!` per parsed or skipped line and a `debug!`
//! summary per bulk read or write; commands report changes at `info!`.


use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};

/// Verbosity on the 0-6 scale used by `global.log_level` and `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    /// Trace output from dependencies as well.
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `level` is above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if level <= Self::DUMP.0 {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `EnvFilter` directive for this level.
    ///
    /// Below [`LogLevel::DUMP`] only events from this crate pass.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "dotenv_store=error",
            2 => "dotenv_store=warn",
            3 => "dotenv_store=info",
            4 => "dotenv_store=debug",
            5 => "dotenv_store=trace",
            _ => "trace",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::WARN
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// What [`init_logging`] installs.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    /// Receives every event of this crate at trace level.
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Flushes the log file when dropped. Keep it alive until exit.
#[must_use = "dropping the guard stops writing the log file"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created, or if
/// a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(EnvFilter::new(config.console_level.directive()));

    let (file, guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = open_log_file(path)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(LogLevel::TRACE.directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(LogGuard { _file: guard })
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}
