// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line codec: one `.env` line <-> one `(key, Entry)` pair.
//!
//! # Line Grammar
//!
//! ```text
//! line    = ... KEY "=" [ \t]* VALUE ... [ "#" comment ]
//! KEY     = [A-Z0-9_,]+
//! VALUE   = '"' ( [^"\] | \. )* '"'     double-quoted, escapes verbatim
//!         | "'" ( [^'\] | \. )* "'"     single-quoted, escapes verbatim
//!         | [^'"#\r\n]*                unquoted run, trimmed, may be empty
//! comment = everything after the first '#' on the raw line
//! ```
//!
//! The first acceptable `KEY=VALUE` match on the line wins. Lines without a
//! match are rejected and carry no state over to the next line.
//!
//! An unquoted run ends at the first quote, `#` or line break, and surrounding
//! whitespace is dropped: `KEY= a b  # c` holds `a b`, `HASH=#tag` holds an
//! empty value with the comment `tag`. A run that is blank and directly
//! followed by a quote (`KEY='open`) is an unterminated quoted value and does
//! not count as a match.
//!
//! # Rendering
//!
//! ```text
//! KEY=value\n                  unquoted, no comment
//! KEY="value"    #comment\n    quoted (always '"'), four-space comment gap
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::store::Entry;

const KEY_PATTERN: &str = r"[A-Z0-9_,]+";
const DOUBLE_QUOTED_PATTERN: &str = r#""(?:[^"\\]|\\.)*?""#;
const SINGLE_QUOTED_PATTERN: &str = r"'(?:[^'\\]|\\.)*?'";
const UNQUOTED_RUN_PATTERN: &str = r##"[^'"#\r\n]*"##;
const UNQUOTED_VALUE_PATTERN: &str = r##"(?:[^'"#\s](?:[^'"#\r\n]*[^'"#\s])?)?"##;

/// Gap between a rendered value and its comment marker.
pub const COMMENT_SEPARATOR: &str = "    #";

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// `KEY=VALUE` anywhere on a line, capturing key and raw value token.
fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(&format!(
            "({KEY_PATTERN})=[ \t]*({DOUBLE_QUOTED_PATTERN}|{SINGLE_QUOTED_PATTERN}|{UNQUOTED_RUN_PATTERN})"
        ))
    })
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!("^{KEY_PATTERN}$")))
}

fn quoted_value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r#"^(?:[^"\\#\r\n]|\\[^#\r\n])*$"#))
}

fn unquoted_value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!("^{UNQUOTED_VALUE_PATTERN}$")))
}

/// Returns true if `key` is a well-formed key (`[A-Z0-9_,]+`).
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    key_regex().is_match(key)
}

/// Returns true if `value` renders to a token that parses back to itself.
///
/// Quoted values may hold anything a double-quoted run accepts (backslash
/// escapes included) except `#` and line breaks. Unquoted values must be a
/// run without quotes, `#`, or surrounding whitespace; the empty string is
/// allowed.
#[must_use]
pub fn is_valid_value(value: &str, quoted: bool) -> bool {
    if quoted {
        quoted_value_regex().is_match(value)
    } else {
        unquoted_value_regex().is_match(value)
    }
}

/// Extracts the comment: everything after the first `#` on the raw line.
///
/// Quoting is not taken into account, so a `#` inside a quoted value starts
/// a comment too. `KEY="a#b"` yields the comment `b"`.
#[must_use]
pub fn extract_comment(line: &str) -> Option<&str> {
    line.split_once('#').map(|(_, comment)| comment)
}

/// Strips one pair of matching surrounding quotes.
///
/// Returns the interior and `true` when `token` is at least two characters
/// long and starts and ends with the same quote character.
fn unquote(token: &str) -> (&str, bool) {
    let bytes = token.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && first == last && (first == b'"' || first == b'\'') =>
        {
            (&token[1..token.len() - 1], true)
        }
        _ => (token, false),
    }
}

/// Parses one line into a key and its entry.
///
/// Returns `None` when the line holds no `KEY=VALUE` match.
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, Entry)> {
    line_regex().captures_iter(line).find_map(|captures| {
        let end = captures.get(0)?.end();
        let key = captures.get(1)?.as_str();
        let (value, quoted) = match unquote(captures.get(2)?.as_str()) {
            (inner, true) => (inner, true),
            (raw, false) => {
                let value = raw.trim();
                if value.is_empty() && line[end..].starts_with(['"', '\'']) {
                    return None;
                }
                (value, false)
            }
        };

        Some((
            key.to_string(),
            Entry {
                value: value.to_string(),
                quoted,
                comment: extract_comment(line).map(str::to_string),
            },
        ))
    })
}

/// Renders one entry as a newline-terminated line.
///
/// The entry is not re-validated.
#[must_use]
pub fn render_line(key: &str, entry: &Entry) -> String {
    let mut line = String::with_capacity(
        key.len() + entry.value.len() + entry.comment.as_ref().map_or(0, String::len) + 8,
    );
    line.push_str(key);
    line.push('=');
    if entry.quoted {
        line.push('"');
        line.push_str(&entry.value);
        line.push('"');
    } else {
        line.push_str(&entry.value);
    }
    if let Some(comment) = &entry.comment {
        line.push_str(COMMENT_SEPARATOR);
        line.push_str(comment);
    }
    line.push('\n');
    line
}
