// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use jl_core::{JobRecord, JobType, Payload};
use jl_storage::TIMESTAMP_FORMAT;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Job record as shown to users
#[derive(Serialize)]
pub struct JobInfo {
    pub id: String,
    pub job_type: JobType,
    pub provider_name: String,
    pub device_name: String,
    pub dispatch_time: String,
    pub params: Payload,
    pub data: Payload,
}

impl JobInfo {
    /// Header line of the `jl list` table
    pub fn table_header() -> String {
        format!(
            "{:<37} {:<20} {:<12} {:<20} DISPATCHED",
            "ID", "TYPE", "PROVIDER", "DEVICE"
        )
    }

    /// One line of the `jl list` table
    pub fn table_row(&self) -> String {
        format!(
            "{:<37} {:<20} {:<12} {:<20} {}",
            self.id,
            truncate(self.job_type.name(), 20),
            truncate(&self.provider_name, 12),
            truncate(&self.device_name, 20),
            self.dispatch_time
        )
    }
}

impl From<&JobRecord> for JobInfo {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id.clone(),
            job_type: job.job_type.clone(),
            provider_name: job.provider_name.clone(),
            device_name: job.device_name.clone(),
            dispatch_time: job.dispatch_time.format(TIMESTAMP_FORMAT).to_string(),
            params: job.params.clone(),
            data: job.data.clone(),
        }
    }
}

impl fmt::Display for JobInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Job: {}", self.id)?;
        writeln!(f, "  Type: {}", self.job_type)?;
        writeln!(f, "  Provider: {}", self.provider_name)?;
        writeln!(f, "  Device: {}", self.device_name)?;
        write!(f, "  Dispatched: {}", self.dispatch_time)?;
        write_payload(f, "Params", &self.params)?;
        write_payload(f, "Data", &self.data)
    }
}

fn write_payload(f: &mut fmt::Formatter<'_>, label: &str, payload: &Payload) -> fmt::Result {
    if payload.is_empty() {
        return Ok(());
    }
    write!(f, "\n  {}:", label)?;
    for (key, value) in payload {
        write!(f, "\n    {}: {}", key, value)?;
    }
    Ok(())
}

fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
