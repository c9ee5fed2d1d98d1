// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry store for `.env` files.
//!
//! # Architecture
//!
//! ```text
//! EnvStore (IndexMap<String, Entry>)
//! Sources: EnvStore::new(), EnvStore::from_reader(), read()
//! Ops: add/get/delete/get_all, write()
//! ```
//!
//! - **Order-preserving**: iteration follows first insertion
//! - **Validated**: `add` accepts only entries that survive `write` + `read`
//! - **Single owner**: no interior mutability, mutate through `&mut`
//!
//! # Known limitation
//!
//! Comments start at the first `#` of a line even inside a quoted value, so
//! `KEY="a#b"` reads back with the comment `b"`. See
//! [`codec::extract_comment`](crate::codec::extract_comment).

pub mod container;
pub mod entry;


pub use container::EnvStore;
pub use entry::Entry;
