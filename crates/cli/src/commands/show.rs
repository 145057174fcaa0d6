// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Show command

use crate::output::{self, JobInfo, OutputFormat};
use anyhow::bail;
use clap::Args;
use jl_storage::LedgerStore;

#[derive(Args)]
pub struct ShowArgs {
    /// Job id or unique id prefix
    pub id: String,
    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

pub fn show(store: &LedgerStore, args: ShowArgs) -> anyhow::Result<()> {
    let Some(job) = store.find(&args.id)? else {
        bail!("job not found: {}", args.id);
    };
    output::print(&JobInfo::from(&job), args.output)
}
