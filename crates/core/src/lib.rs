// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jl-core: Core types for the job ledger
//!
//! This crate provides:
//! - The persisted job record
//! - Job type identifiers and the registry that validates them
//! - A clock abstraction for stamping dispatch times

pub mod clock;
pub mod job;
pub mod job_type;

pub use clock::{Clock, FakeClock, SystemClock};
pub use job::{JobRecord, Payload};
pub use job_type::{JobType, JobTypeRegistry};
