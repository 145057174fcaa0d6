// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jl-storage: Append-only JSONL job ledger
//!
//! - [`RecordCodec`] translates between a [`jl_core::JobRecord`] and one JSON line
//! - [`LedgerStore`] appends records and reloads them, skipping bad lines
//! - [`LedgerConfig`] locates the ledger file

pub mod codec;
pub mod config;
pub mod ledger;

pub use codec::{DecodeError, RecordCodec, TIMESTAMP_FORMAT};
pub use config::{ConfigError, LedgerConfig, LEDGER_PATH_ENV};
pub use ledger::{LedgerError, LedgerStore};
