// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::PathBuf;

use dotenv_store::config::Config;
use dotenv_store::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
log_level = 3
log_file = "logs/envstore.log"

[store]
file = "deploy/prod.env"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      log_level: 3
      log_file: logs/envstore.log
    store:
      file: deploy/prod.env
    ");
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn config_parse_rejects_wrong_type() {
    assert!(Config::parse("[global]\nlog_level = \"loud\"\n").is_err());
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_layered_files() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut base = NamedTempFile::new().unwrap();
    writeln!(base, "[global]\nlog_level = 1\n\n[store]\nfile = \"base.env\"").unwrap();
    let mut local = NamedTempFile::new().unwrap();
    writeln!(local, "[store]\nfile = \"local.env\"").unwrap();

    let config = Config::builder()
        .add_file(base.path())
        .add_file(local.path())
        .build()
        .unwrap();

    assert_eq!(config.global.log_level, LogLevel::ERROR);
    assert_eq!(config.store.file, PathBuf::from("local.env"));
}

#[test]
fn config_from_missing_file() {
    assert!(Config::from_file("/nonexistent/envstore.toml").is_err());
}
