// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, ConfigSource, DEFAULT_ENV_FILE};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.store.file, PathBuf::from(DEFAULT_ENV_FILE));
    assert_eq!(config.global.log_level, LogLevel::WARN);
    assert_eq!(config.global.log_file, None);
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[global]
log_level = 4

[store]
file = "conf/app.env"
"#,
    )
    .unwrap();

    assert_eq!(
        config.format_options(),
        [
            "global.log_file  = ",
            "global.log_level = 4",
            "store.file       = conf/app.env",
        ]
    );
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let result = Config::parse("[store]\nfile = \".env\"\nformat = \"json\"\n");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\nlog_level = 9\n").is_err());
}

#[test]
fn test_validate_rejects_empty_store_file() {
    let err = Config::parse("[store]\nfile = \"\"\n").unwrap_err();
    assert!(
        err.to_string().contains("store"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn test_validate_clears_empty_log_file() {
    let config = Config::parse("[global]\nlog_file = \"\"\n").unwrap();
    assert_eq!(config.global.log_file, None);
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[store]\nfile = \"/srv/app/.env\"").expect("failed to write temp file");

    let loader = ConfigLoader::new().add_file(file.path());
    assert_eq!(
        loader.sources(),
        [ConfigSource::File(file.path().to_path_buf())]
    );

    let config = loader.build().expect("build should succeed");
    assert_eq!(config.store.file, PathBuf::from("/srv/app/.env"));
}

#[test]
fn test_config_loader_add_file_not_found() {
    let loader = ConfigLoader::new().add_file("/nonexistent/path/to/envstore.toml");
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_default_file_missing() {
    let loader = ConfigLoader::new().add_default_file("/nonexistent/envstore.toml");
    assert!(loader.sources().is_empty());

    let config = loader.build().expect("missing default file is fine");
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_loader_standard_without_default_file() {
    let loader = ConfigLoader::standard(false);
    assert!(loader.sources().is_empty());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("ENVSTORETEST_STORE__FILE", "from-env.env");
    }

    let config = ConfigLoader::new()
        .add_inline("[store]\nfile = \"from-toml.env\"")
        .with_env_prefix("ENVSTORETEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("ENVSTORETEST_STORE__FILE");
    }

    assert_eq!(config.store.file, PathBuf::from("from-env.env"));
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_inline("[global]\nlog_level = 1")
        .set("global.log_level", 5)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.log_level, LogLevel::TRACE);
}

#[test]
fn test_config_sources_display() {
    let sources = [
        ConfigSource::Default(PathBuf::from("envstore.toml")),
        ConfigSource::File(PathBuf::from("/etc/envstore.toml")),
        ConfigSource::Inline,
    ];
    let lines: Vec<String> = sources.iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    default envstore.toml
    file    /etc/envstore.toml
    inline
    ");
}
