// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints a JSON object instead of `KEY=value` lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fmt` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FmtArgs {
    /// Writes the result to FILE instead of stdout. May name the input file.
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Fails if the file is not already normalized; writes nothing.
    #[arg(long)]
    pub check: bool,
}
