// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List command

use crate::output::{JobInfo, OutputFormat};
use clap::Args;
use jl_storage::LedgerStore;

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

pub fn list(store: &LedgerStore, args: ListArgs) -> anyhow::Result<()> {
    let jobs: Vec<JobInfo> = store.load_all()?.iter().map(JobInfo::from).collect();

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&jobs)?),
        OutputFormat::Text if jobs.is_empty() => println!("No jobs"),
        OutputFormat::Text => {
            println!("{}", JobInfo::table_header());
            for job in &jobs {
                println!("{}", job.table_row());
            }
        }
    }

    Ok(())
}
