// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use std::io::Write;

use crate::config::{Config, ConfigSource};
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display the configuration layers in load order.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn run_configs_command(sources: &[ConfigSource], out: &mut impl Write) -> Result<()> {
    if sources.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    }
    for (index, source) in sources.iter().enumerate() {
        writeln!(out, "{}. {source}", index + 1)?;
    }
    Ok(())
}
