// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-key command arguments.

use clap::Args;

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Key to look up.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Key to add or overwrite (`[A-Z0-9_,]+`).
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Value to store.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Writes the value wrapped in double quotes.
    #[arg(short = 'q', long)]
    pub quoted: bool,

    /// Trailing comment, written after `#`.
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub comment: Option<String>,
}

/// Arguments for the `unset` command.
#[derive(Debug, Clone, Args)]
pub struct UnsetArgs {
    /// Key to remove.
    #[arg(value_name = "KEY")]
    pub key: String,
}
