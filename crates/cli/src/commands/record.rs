// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record command

use anyhow::anyhow;
use clap::Args;
use jl_core::{Clock, JobRecord, Payload};
use jl_storage::LedgerStore;
use serde_json::Value;

#[derive(Args)]
pub struct RecordArgs {
    /// Provider the job was dispatched to
    #[arg(long)]
    pub provider: String,
    /// Device the job runs on
    #[arg(long)]
    pub device: String,
    /// Job type (see `jl types`)
    #[arg(long = "job-type")]
    pub job_type: String,
    /// Job id (defaults to a random UUID)
    #[arg(long)]
    pub id: Option<String>,
    /// Dispatch parameter as KEY=VALUE; VALUE is parsed as JSON when possible
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, Value)>,
    /// Result-retrieval data as KEY=VALUE; VALUE is parsed as JSON when possible
    #[arg(long = "data", value_parser = parse_key_value)]
    pub data: Vec<(String, Value)>,
}

fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no '=' found in '{}'", s))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in '{}'", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Append a new job record, returning its id
pub fn record(store: &LedgerStore, args: RecordArgs, clock: &impl Clock) -> anyhow::Result<String> {
    let job_type = store
        .codec()
        .job_types()
        .lookup(&args.job_type)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "unknown job type: {} (run `jl types` to list them)",
                args.job_type
            )
        })?;

    let id = args
        .id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let job = JobRecord::new(id, args.provider, args.device, job_type, clock.now())
        .with_params(args.params.into_iter().collect::<Payload>())
        .with_data(args.data.into_iter().collect::<Payload>());

    store.append(&job)?;
    Ok(job.id)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
