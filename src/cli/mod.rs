// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for `envstore` using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envstore [global options] <command>
//! get KEY
//! set KEY VALUE [--quoted] [--comment TEXT]
//! unset KEY
//! list [--json]
//! fmt [-o OUTPUT] [--check]
//! dump
//! options | configs | version
//! ```

pub mod entry;
pub mod file;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::entry::{GetArgs, SetArgs, UnsetArgs};
use crate::cli::file::{FmtArgs, ListArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Order-preserving `.env` file editor.
#[derive(Debug, Parser)]
#[command(
    name = "envstore",
    author,
    version,
    about = "Read, edit and normalize .env files",
    long_about = "envstore reads `KEY=value` lines from an env file, keeps them in\n\
                  their original order, and writes them back normalized: values are\n\
                  double-quoted when they were quoted on input and comments are kept.\n\n\
                  Lines that do not hold a `KEY=value` pair are dropped on write.",
    after_help = "CONFIG FILES:\n\n\
                  `envstore.toml` in the current directory is loaded when present,\n\
                  followed by every --config file in order. ENVSTORE_<SECTION>__<KEY>\n\
                  environment variables override both, and --file/--log-level/--log-file\n\
                  override everything. Use --no-default-config to skip envstore.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files that were loaded.
    Configs,

    /// Prints the value of a key.
    Get(GetArgs),

    /// Adds or overwrites a key and saves the file.
    Set(SetArgs),

    /// Removes a key and saves the file.
    Unset(UnsetArgs),

    /// Lists all keys and values in file order.
    List(ListArgs),

    /// Rewrites the file in normalized form.
    Fmt(FmtArgs),

    /// Prints the parsed entries with quoting and comments.
    Dump,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
