// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job record: the metadata persisted for one dispatched job

use crate::clock::SUBSEC_DIGITS;
use crate::job_type::JobType;
use chrono::{NaiveDateTime, SubsecRound};
use serde_json::{Map, Value};

/// Free-form key/value payload carried by a job (`params`, `data`)
pub type Payload = Map<String, Value>;

/// Metadata for one dispatched job.
///
/// `id` is assigned by the caller and is not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub id: String,
    pub provider_name: String,
    pub device_name: String,
    pub job_type: JobType,
    /// Parameters the job was dispatched with
    pub params: Payload,
    /// Provider-specific data needed to retrieve results later
    pub data: Payload,
    pub dispatch_time: NaiveDateTime,
}

impl JobRecord {
    /// Create a record with empty `params` and `data`.
    ///
    /// `dispatch_time` is truncated to microseconds, the precision the
    /// ledger stores.
    pub fn new(
        id: impl Into<String>,
        provider_name: impl Into<String>,
        device_name: impl Into<String>,
        job_type: JobType,
        dispatch_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            provider_name: provider_name.into(),
            device_name: device_name.into(),
            job_type,
            params: Payload::new(),
            data: Payload::new(),
            dispatch_time: dispatch_time.trunc_subsecs(SUBSEC_DIGITS),
        }
    }

    pub fn with_params(mut self, params: Payload) -> Self {
        self.params = params;
        self
    }

    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = data;
        self
    }

    pub fn with_dispatch_time(mut self, dispatch_time: NaiveDateTime) -> Self {
        self.dispatch_time = dispatch_time.trunc_subsecs(SUBSEC_DIGITS);
        self
    }

    /// True if `id` is exactly this record's id or a prefix of it
    pub fn matches_id(&self, id: &str) -> bool {
        !id.is_empty() && self.id.starts_with(id)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
