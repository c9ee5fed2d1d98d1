// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file commands: list, fmt, dump.

use std::io::{ErrorKind, Write};

use anyhow::Context;
use tracing::info;

use super::{load_store, save_store};
use crate::cli::file::{FmtArgs, ListArgs};
use crate::config::Config;
use crate::error::{Result, bail_out};

/// Lists every key and value in file order.
///
/// An empty or missing file prints nothing (`{}` with `--json`).
///
/// # Errors
///
/// Returns an error if the env file cannot be read or output fails.
pub fn run_list_command(args: &ListArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let store = load_store(&config.store.file)?;

    let all = match store.get_all() {
        Ok(all) => all,
        Err(e) if e.is_not_found() => Default::default(),
        Err(e) => return Err(e.into()),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &all).context("failed to encode JSON")?;
        writeln!(out)?;
    } else {
        for (key, value) in &all {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

/// Re-renders the env file in normalized form.
///
/// Without `--output` the result goes to `out`. With `--check` nothing is
/// written and the command fails if the file would change.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if `--check`
/// finds a file that is not normalized.
pub fn run_fmt_command(args: &FmtArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let path = &config.store.file;
    let store = load_store(path)?;

    if args.check {
        let mut rendered = Vec::new();
        store.write(&mut rendered)?;
        let current = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        if current != rendered {
            return Err(bail_out(format!("{} is not normalized", path.display())).into());
        }
        info!(path = %path.display(), "Env file is normalized");
        return Ok(());
    }

    match &args.output {
        Some(output) => save_store(&store, output)?,
        None => store.write(&mut *out)?,
    }
    Ok(())
}

/// Prints the parsed store, including quoting and comments.
///
/// # Errors
///
/// Returns an error if the env file cannot be read or output fails.
pub fn run_dump_command(config: &Config, out: &mut impl Write) -> Result<()> {
    let store = load_store(&config.store.file)?;
    writeln!(out, "{store:#?}")?;
    Ok(())
}
