// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AppError, AppResult, ConfigError, FsError, StoreError, bail_out};

#[test]
fn test_store_error_display() {
    let errors = [
        StoreError::KeyInvalid {
            key: "lower".to_string(),
        },
        StoreError::ValueInvalid {
            key: "KEY".to_string(),
            value: "a\"b".to_string(),
        },
        StoreError::not_found("MISSING"),
        StoreError::NotFound { key: None },
    ];
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(rendered.join("\n"), @r#"
    invalid key 'lower'
    invalid value for 'KEY': "a\"b"
    key 'MISSING' not found
    store is empty
    "#);
}

#[test]
fn test_store_error_is_not_found() {
    assert!(StoreError::not_found("KEY").is_not_found());
    assert!(
        !StoreError::KeyInvalid {
            key: "key".to_string()
        }
        .is_not_found()
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "store".to_string(),
        key: "file".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'file' in section '[store]': must not be empty");
}

#[test]
fn test_app_error_from_sub_errors() {
    let err: AppError = StoreError::not_found("KEY").into();
    insta::assert_snapshot!(err.to_string(), @"store error: key 'KEY' not found");

    let err: AppError = FsError::IoError {
        path: "app.env".to_string(),
        source: std::io::Error::other("denied"),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"filesystem error: I/O error on 'app.env': denied");

    let bailed = bail_out("cannot continue");
    insta::assert_snapshot!(bailed.to_string(), @"fatal error: cannot continue");
}

#[test]
fn test_app_error_size() {
    let size = std::mem::size_of::<AppError>();
    assert!(size <= 24, "AppError is {size} bytes, expected <= 24");
}

#[test]
fn test_app_result_size() {
    let size = std::mem::size_of::<AppResult<()>>();
    assert!(size <= 24, "AppResult<()> is {size} bytes, expected <= 24");
}
