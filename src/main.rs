// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> ConfigLoader --> Logging --> Command Dispatch
//!   Get | Set | Unset | List | Fmt | Dump | Options | Configs
//! ```

use std::io::Write;
use std::process::ExitCode;

use dotenv_store::cli::global::GlobalOptions;
use dotenv_store::cli::{self, Cli, Command};
use dotenv_store::cmd::config::{run_configs_command, run_options_command};
use dotenv_store::cmd::entry::{run_get_command, run_set_command, run_unset_command};
use dotenv_store::cmd::file::{run_dump_command, run_fmt_command, run_list_command};
use dotenv_store::config::loader::ConfigLoader;
use dotenv_store::config::{Config, ConfigSource};
use dotenv_store::error::Result;
use dotenv_store::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.sources().to_vec();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, &config, &sources) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let loader = global
        .configs
        .iter()
        .fold(ConfigLoader::standard(!global.no_default_config), |loader, path| {
            loader.add_file(path)
        });
    global.apply_overrides(loader)
}

fn dispatch_command(cli: &Cli, config: &Config, sources: &[ConfigSource]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Some(Command::Options) => run_options_command(config, &mut out),
        Some(Command::Configs) => run_configs_command(sources, &mut out),
        Some(Command::Get(args)) => run_get_command(args, config, &mut out),
        Some(Command::Set(args)) => run_set_command(args, config),
        Some(Command::Unset(args)) => run_unset_command(args, config),
        Some(Command::List(args)) => run_list_command(args, config, &mut out),
        Some(Command::Fmt(args)) => run_fmt_command(args, config, &mut out),
        Some(Command::Dump) => run_dump_command(config, &mut out),
        None => Err(anyhow::anyhow!(
            "No command specified. Use --help for usage information."
        )),
    };

    out.flush()?;
    result
}
