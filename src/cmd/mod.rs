// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> out (stdout in main, buffers in tests)
//!   entry: get, set, unset
//!   file:  list, fmt, dump
//!   config: options, configs
//!
//! load_store  missing file -> empty store
//! save_store  temp file in target dir -> persist (atomic replace)
//! ```

pub mod config;
pub mod entry;
pub mod file;


use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, FsError, StoreError};
use crate::store::EnvStore;

fn fs_error(path: &Path, err: StoreError) -> AppError {
    match err {
        StoreError::Io(source) => FsError::IoError {
            path: path.display().to_string(),
            source,
        }
        .into(),
        other => other.into(),
    }
}

/// Loads the env file at `path`.
///
/// A missing file yields an empty store, so `set` can create new files.
///
/// # Errors
///
/// Returns [`FsError::IoError`] if the file exists but cannot be opened or read.
pub fn load_store(path: &Path) -> AppResult<EnvStore> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Env file not found, starting empty");
            return Ok(EnvStore::new());
        }
        Err(source) => {
            return Err(FsError::IoError {
                path: path.display().to_string(),
                source,
            }
            .into());
        }
    };

    EnvStore::from_reader(file).map_err(|e| fs_error(path, e))
}

/// Writes `store` to `path`, replacing the file atomically.
///
/// The new content goes to a temporary file in the same directory, which is
/// then renamed over `path`. Permissions of an existing file are kept.
///
/// # Errors
///
/// Returns [`FsError`] if the temporary file cannot be written or persisted.
pub fn save_store(store: &EnvStore, path: &Path) -> AppResult<()> {
    let io_error = |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error)?;
    }
    store
        .write(BufWriter::new(temp.as_file_mut()))
        .map_err(|e| fs_error(path, e))?;
    temp.persist(path).map_err(|e| FsError::PersistFailed {
        path: path.display().to_string(),
        source: e.error,
    })?;

    info!(path = %path.display(), entries = store.len(), "Saved env file");
    Ok(())
}
