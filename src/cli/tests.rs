// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::config::loader::ConfigLoader;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envstore", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envstore",
        "-l",
        "5",
        "-f",
        "/tmp/app.env",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "dump",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file, Some(PathBuf::from("/tmp/app.env")));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Dump)));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envstore", "-l", "7", "dump"]).is_err());
}

#[test]
fn test_parse_set() {
    let cli = Cli::try_parse_from([
        "envstore",
        "set",
        "DATABASE_URL",
        "-x",
        "--quoted",
        "--comment",
        " primary",
    ])
    .unwrap();

    let Some(Command::Set(args)) = cli.command else {
        panic!("expected set command");
    };
    assert_eq!(args.key, "DATABASE_URL");
    assert_eq!(args.value, "-x");
    assert!(args.quoted);
    assert_eq!(args.comment.as_deref(), Some(" primary"));
}

#[test]
fn test_parse_fmt_output_conflicts_with_check() {
    assert!(Cli::try_parse_from(["envstore", "fmt", "-o", "out.env", "--check"]).is_err());

    let cli = Cli::try_parse_from(["envstore", "fmt", "--check"]).unwrap();
    let Some(Command::Fmt(args)) = cli.command else {
        panic!("expected fmt command");
    };
    assert!(args.check);
    assert_eq!(args.output, None);
}

#[test]
fn test_apply_overrides() {
    let cli = Cli::try_parse_from([
        "envstore",
        "--file",
        "override.env",
        "--log-level",
        "4",
        "list",
    ])
    .unwrap();

    let loader = ConfigLoader::new().add_inline("[store]\nfile = \"toml.env\"\n");
    let config = cli
        .global
        .apply_overrides(loader)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.store.file, PathBuf::from("override.env"));
    assert_eq!(config.global.log_level, LogLevel::DEBUG);
}
