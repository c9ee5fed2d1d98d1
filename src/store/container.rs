// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered entry store and its bulk read/write.
//!
//! # Architecture
//!
//! ```text
//! EnvStore
//! entries: IndexMap<String, Entry>   key order == first insertion
//!
//! add     validate key/value -> insert (existing key keeps its slot)
//! delete  shift_remove       -> remaining keys keep relative order
//! read    lines -> codec::parse_line -> fresh map -> swap in
//! write   entries in order  -> codec::render_line -> sink
//! ```

use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read, Write};

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::entry::Entry;
use crate::codec;
use crate::error::{StoreError, StoreResult};

/// An insertion-ordered set of `.env` entries.
///
/// Keys and their order live in a single [`IndexMap`], so the iteration
/// order is always the first-insertion order of the keys currently present.
/// Two stores are equal only if they hold the same entries in the same order.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    entries: IndexMap<String, Entry>,
}

impl EnvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a text stream.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the stream cannot be read.
    pub fn from_reader(source: impl Read) -> StoreResult<Self> {
        let mut store = Self::new();
        store.read(source)?;
        Ok(store)
    }

    /// Inserts or overwrites an entry.
    ///
    /// An existing key keeps its position; a new key is appended. Nothing is
    /// modified when validation fails.
    ///
    /// # Errors
    ///
    /// - [`StoreError::KeyInvalid`] if `key` is not `[A-Z0-9_,]+`.
    /// - [`StoreError::ValueInvalid`] if `value` would not survive a
    ///   write/read cycle in the requested quoting, or `comment` spans lines.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        quoted: bool,
        comment: Option<String>,
    ) -> StoreResult<()> {
        let key = key.into();
        let value = value.into();

        if !codec::is_valid_key(&key) {
            return Err(StoreError::KeyInvalid { key });
        }
        let comment_ok = comment
            .as_deref()
            .is_none_or(|c| !c.contains(['\r', '\n']));
        if !comment_ok || !codec::is_valid_value(&value, quoted) {
            return Err(StoreError::ValueInvalid { key, value });
        }

        self.entries.insert(
            key,
            Entry {
                value,
                quoted,
                comment,
            },
        );
        Ok(())
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> StoreResult<&str> {
        self.entries
            .get(key)
            .map(|entry| entry.value.as_str())
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Removes `key` and returns its entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent.
    pub fn delete(&mut self, key: &str) -> StoreResult<Entry> {
        self.get(key)?;
        self.entries
            .shift_remove(key)
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Returns a snapshot of every key and its value, in store order.
    ///
    /// An empty store is reported as [`StoreError::NotFound`] rather than an
    /// empty map; callers that treat "nothing stored" as a normal outcome
    /// check [`StoreError::is_not_found`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the store holds no entries.
    pub fn get_all(&self) -> StoreResult<IndexMap<String, String>> {
        if self.entries.is_empty() {
            return Err(StoreError::NotFound { key: None });
        }
        Ok(self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect())
    }

    /// Replaces the contents with the entries parsed from `source`.
    ///
    /// Lines are parsed independently; lines without a `KEY=VALUE` match are
    /// skipped. A repeated key takes the value of its last occurrence but stays
    /// at the position of its first. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD, so one bad byte only affects its own line. On
    /// error the current contents are kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if reading from `source` fails.
    pub fn read(&mut self, source: impl Read) -> StoreResult<()> {
        let mut reader = BufReader::new(source);
        let mut entries = IndexMap::new();
        let mut buf = Vec::new();
        let mut number = 0usize;
        let mut skipped = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            if matches!(line, Cow::Owned(_)) {
                warn!(line = number, "Replaced invalid UTF-8 in line");
            }

            match codec::parse_line(&line) {
                Some((key, entry)) => {
                    trace!(line = number, key = %key, quoted = entry.quoted, "Parsed entry");
                    entries.insert(key, entry);
                }
                None => {
                    trace!(line = number, "Skipped line without entry");
                    skipped += 1;
                }
            }
        }

        debug!(entries = entries.len(), skipped, "Read env entries");
        self.entries = entries;
        Ok(())
    }

    /// Writes every entry as one line, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if writing to `sink` fails.
    pub fn write(&self, mut sink: impl Write) -> StoreResult<()> {
        for (key, entry) in &self.entries {
            sink.write_all(codec::render_line(key, entry).as_bytes())?;
        }
        sink.flush()?;
        debug!(entries = self.entries.len(), "Wrote env entries");
        Ok(())
    }

    /// Returns the full entry for `key`.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the keys in store order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over keys and entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl PartialEq for EnvStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for EnvStore {}

impl<'a> IntoIterator for &'a EnvStore {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
