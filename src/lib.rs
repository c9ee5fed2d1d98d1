// dotenv-store: Order-preserving `.env` key-value store
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         get / set / list / fmt
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, ENVSTORE_* vars   |
//!              '-------------+-------------'
//!                            v
//!                  store (EnvStore, Entry)
//!                            |
//!                            v
//!                   codec (line grammar)
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
