// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-line JSON encoding of job records.
//!
//! Decoding is an ordered pipeline. The first failing stage decides the
//! error:
//!
//! 1. JSON syntax
//! 2. presence and shape of every required field
//! 3. job type membership in the registry
//! 4. dispatch time format

use chrono::NaiveDateTime;
use jl_core::{JobRecord, JobTypeRegistry, Payload};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Format used to write `dispatch_time`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

// Accepts any number of fraction digits, including none
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Why a ledger line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed JSON at pos {column}: {message}")]
    MalformedJson { column: usize, message: String },
    #[error("Incorrect data structure: {detail}")]
    IncompleteStructure { detail: String },
    #[error("Unknown job type: {value}")]
    UnknownJobType { value: String },
    #[error("Bad datetime format: {value} ({reason})")]
    BadTimestamp { value: String, reason: String },
}

impl DecodeError {
    /// Short category label used in diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            DecodeError::MalformedJson { .. } => "malformed JSON",
            DecodeError::IncompleteStructure { .. } => "incorrect data structure",
            DecodeError::UnknownJobType { .. } => "unknown job type",
            DecodeError::BadTimestamp { .. } => "bad datetime format",
        }
    }

    fn malformed(err: serde_json::Error) -> Self {
        let full = err.to_string();
        let position = format!(" at line {} column {}", err.line(), err.column());
        let message = full.strip_suffix(&position).unwrap_or(&full).to_string();
        DecodeError::MalformedJson {
            column: err.column(),
            message,
        }
    }
}

/// Encodes records to JSON lines and decodes them back, validating job
/// types against an injected registry
#[derive(Debug, Clone)]
pub struct RecordCodec {
    job_types: JobTypeRegistry,
}

impl RecordCodec {
    pub fn new(job_types: JobTypeRegistry) -> Self {
        Self { job_types }
    }

    pub fn job_types(&self) -> &JobTypeRegistry {
        &self.job_types
    }

    /// Serialize a record to a single JSON line (no trailing newline)
    pub fn encode(&self, record: &JobRecord) -> Result<String, serde_json::Error> {
        let line = RecordLine {
            id: &record.id,
            provider_name: &record.provider_name,
            device_name: &record.device_name,
            job_type: record.job_type.name(),
            params: &record.params,
            data: &record.data,
            dispatch_time: record.dispatch_time.format(TIMESTAMP_FORMAT).to_string(),
        };
        serde_json::to_string(&line)
    }

    /// Parse one JSON line back into a record
    pub fn decode(&self, line: &str) -> Result<JobRecord, DecodeError> {
        let value: Value = serde_json::from_str(line).map_err(DecodeError::malformed)?;
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(DecodeError::IncompleteStructure {
                    detail: format!("expected a JSON object, found {}", kind(&other)),
                })
            }
        };

        let mut check = FieldCheck::default();
        let id = check.string(&mut fields, "id");
        let provider_name = check.string(&mut fields, "provider_name");
        let device_name = check.string(&mut fields, "device_name");
        let job_type = check.string(&mut fields, "job_type");
        let params = check.object(&mut fields, "params");
        let data = check.object(&mut fields, "data");
        let dispatch_time = check.string(&mut fields, "dispatch_time");

        let (
            Some(id),
            Some(provider_name),
            Some(device_name),
            Some(job_type),
            Some(params),
            Some(data),
            Some(dispatch_time),
        ) = (
            id,
            provider_name,
            device_name,
            job_type,
            params,
            data,
            dispatch_time,
        )
        else {
            return Err(check.into_error());
        };

        let Some(job_type) = self.job_types.lookup(&job_type).cloned() else {
            return Err(DecodeError::UnknownJobType { value: job_type });
        };

        let dispatch_time = match NaiveDateTime::parse_from_str(
            &dispatch_time,
            TIMESTAMP_PARSE_FORMAT,
        ) {
            Ok(time) => time,
            Err(e) => {
                return Err(DecodeError::BadTimestamp {
                    value: dispatch_time,
                    reason: e.to_string(),
                })
            }
        };

        Ok(JobRecord {
            id,
            provider_name,
            device_name,
            job_type,
            params,
            data,
            dispatch_time,
        })
    }
}

#[derive(Serialize)]
struct RecordLine<'a> {
    id: &'a str,
    provider_name: &'a str,
    device_name: &'a str,
    job_type: &'a str,
    params: &'a Payload,
    data: &'a Payload,
    dispatch_time: String,
}

/// Collects every missing or mis-shaped field before reporting
#[derive(Default)]
struct FieldCheck {
    missing: Vec<&'static str>,
    mistyped: Vec<String>,
}

impl FieldCheck {
    fn string(&mut self, fields: &mut Map<String, Value>, key: &'static str) -> Option<String> {
        match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.mistyped
                    .push(format!("`{}` must be a string, found {}", key, kind(&other)));
                None
            }
            None => {
                self.missing.push(key);
                None
            }
        }
    }

    fn object(&mut self, fields: &mut Map<String, Value>, key: &'static str) -> Option<Payload> {
        match fields.remove(key) {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.mistyped
                    .push(format!("`{}` must be an object, found {}", key, kind(&other)));
                None
            }
            None => {
                self.missing.push(key);
                None
            }
        }
    }

    fn into_error(self) -> DecodeError {
        let mut problems = Vec::new();
        if !self.missing.is_empty() {
            problems.push(format!(
                "missing required fields: {}",
                self.missing.join(", ")
            ));
        }
        problems.extend(self.mistyped);
        DecodeError::IncompleteStructure {
            detail: problems.join("; "),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
