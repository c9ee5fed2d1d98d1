// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use dotenv_store::cli::{Cli, Command};
use dotenv_store::config::loader::ConfigLoader;

// =============================================================================
// Entry Commands
// =============================================================================

#[test]
fn cli_get_command() {
    let cli = Cli::try_parse_from(["envstore", "get", "DB_HOST"]).unwrap();
    insta::assert_debug_snapshot!(cli, @r#"
    Cli {
        global: GlobalOptions {
            configs: [],
            file: None,
            log_level: None,
            log_file: None,
            no_default_config: false,
        },
        command: Some(
            Get(
                GetArgs {
                    key: "DB_HOST",
                },
            ),
        ),
    }
    "#);
}

#[test]
fn cli_set_with_quote_and_comment() {
    let cli = Cli::try_parse_from([
        "envstore",
        "set",
        "DB_URL",
        "postgres://db/app",
        "-q",
        "-m",
        "primary",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.command, @r#"
    Some(
        Set(
            SetArgs {
                key: "DB_URL",
                value: "postgres://db/app",
                quoted: true,
                comment: Some(
                    "primary",
                ),
            },
        ),
    )
    "#);
}

#[test]
fn cli_set_requires_value() {
    assert!(Cli::try_parse_from(["envstore", "set", "ONLY_KEY"]).is_err());
}

#[test]
fn cli_unset_command() {
    let cli = Cli::try_parse_from(["envstore", "unset", "OLD"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Unset(ref args)) if args.key == "OLD"));
}

// =============================================================================
// File Commands
// =============================================================================

#[test]
fn cli_list_json() {
    let cli = Cli::try_parse_from(["envstore", "list", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::List(ref args)) if args.json));
}

#[test]
fn cli_fmt_output_and_check_conflict() {
    let result = Cli::try_parse_from(["envstore", "fmt", "--check", "-o", "out.env"]);
    assert!(result.is_err());
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envstore"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Global Options -> Config
// =============================================================================

#[test]
fn cli_overrides_beat_config_file() {
    let cli = Cli::try_parse_from([
        "envstore",
        "--file",
        "override.env",
        "--log-level",
        "0",
        "list",
    ])
    .unwrap();

    let loader = ConfigLoader::new().add_inline(
        r#"
[global]
log_level = 4

[store]
file = "from-config.env"
"#,
    );
    let config = cli.global.apply_overrides(loader).unwrap().build().unwrap();

    insta::assert_yaml_snapshot!(config, @r"
    global:
      log_level: 0
      log_file: ~
    store:
      file: override.env
    ");
}
