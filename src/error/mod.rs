// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      AppError (~24 bytes)
//!            |
//!   +--------+--------+
//!   |        |        |
//!   v        v        v
//! Bail     Store      Fs
//! Box<str>  Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Store   KeyInvalid, ValueInvalid, NotFound, Io
//!   Fs      IoError, PersistFailed
//!   Config  InvalidValue (surfaced through anyhow)
//!
//! All variants boxed => AppError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Result type for [`EnvStore`](crate::store::EnvStore) operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

/// Create a fatal [`AppError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> AppError {
    AppError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    FsError => Fs,
}

// --- Store Errors ---

/// Errors produced by the entry store.
///
/// Lines that fail to parse during a bulk read are skipped and never surface
/// here. Only validation, lookups and stream failures do.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key does not match `[A-Z0-9_,]+`.
    #[error("invalid key '{key}'")]
    KeyInvalid { key: String },

    /// Value cannot be rendered as a token that parses back to itself.
    #[error("invalid value for '{key}': {value:?}")]
    ValueInvalid { key: String, value: String },

    /// Key is absent, or the store holds no entries at all.
    #[error("{}", not_found_message(.key))]
    NotFound { key: Option<String> },

    /// Underlying stream read or write failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_message(key: &Option<String>) -> String {
    key.as_ref().map_or_else(
        || "store is empty".to_string(),
        |key| format!("key '{key}' not found"),
    )
}

impl StoreError {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            key: Some(key.into()),
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Errors opening, reading or replacing an env file.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved over the destination.
    #[error("failed to replace '{path}': {source}")]
    PersistFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
