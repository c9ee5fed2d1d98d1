// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry type held by the store.

use serde::Serialize;

/// One stored value together with its presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Payload without surrounding quotes; escape sequences are kept verbatim.
    pub value: String,
    /// Whether the value is written back wrapped in double quotes.
    pub quoted: bool,
    /// Text after the first `#` of the source line, without the `#`.
    pub comment: Option<String>,
}

impl Entry {
    /// Creates an unquoted entry without a comment.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
            comment: None,
        }
    }

    /// Creates a quoted entry without a comment.
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
