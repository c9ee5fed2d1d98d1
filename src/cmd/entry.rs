// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-key commands: get, set, unset.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use super::{load_store, save_store};
use crate::cli::entry::{GetArgs, SetArgs, UnsetArgs};
use crate::config::Config;
use crate::error::Result;

/// Prints the value stored for a key.
///
/// # Errors
///
/// Returns an error if the env file cannot be read or the key is absent.
pub fn run_get_command(args: &GetArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let store = load_store(&config.store.file)?;
    let value = store
        .get(&args.key)
        .with_context(|| format!("in {}", config.store.file.display()))?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Adds or overwrites a key and saves the env file.
///
/// # Errors
///
/// Returns an error if the key or value is rejected or the file cannot be
/// read or written.
pub fn run_set_command(args: &SetArgs, config: &Config) -> Result<()> {
    let path = &config.store.file;
    let mut store = load_store(path)?;
    let existed = store.contains_key(&args.key);

    store
        .add(
            args.key.as_str(),
            args.value.as_str(),
            args.quoted,
            args.comment.clone(),
        )
        .with_context(|| format!("failed to set '{}'", args.key))?;
    save_store(&store, path)?;

    info!(key = %args.key, updated = existed, "Set key");
    Ok(())
}

/// Removes a key and saves the env file.
///
/// # Errors
///
/// Returns an error if the key is absent or the file cannot be read or written.
pub fn run_unset_command(args: &UnsetArgs, config: &Config) -> Result<()> {
    let path = &config.store.file;
    let mut store = load_store(path)?;

    store
        .delete(&args.key)
        .with_context(|| format!("failed to unset '{}'", args.key))?;
    save_store(&store, path)?;

    info!(key = %args.key, "Removed key");
    Ok(())
}
