// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jl - Job Ledger CLI

mod commands;
mod job_types;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{list, record, show};
use jl_core::SystemClock;
use jl_storage::{LedgerConfig, LedgerStore, RecordCodec};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jl",
    version,
    about = "Job Ledger - record and inspect dispatched benchmark jobs"
)]
struct Cli {
    /// Ledger file (defaults to $JL_LEDGER_PATH, then the user state directory)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a dispatched job
    Record(record::RecordArgs),
    /// List recorded jobs
    List(list::ListArgs),
    /// Show one job by id or id prefix
    Show(show::ShowArgs),
    /// List known job types
    Types,
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Record(args) => {
            let store = open_store(cli.ledger)?;
            let id = record::record(&store, args, &SystemClock)?;
            println!("{}", id);
        }
        Commands::List(args) => list::list(&open_store(cli.ledger)?, args)?,
        Commands::Show(args) => show::show(&open_store(cli.ledger)?, args)?,
        Commands::Types => {
            for name in job_types::builtin().names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Open the ledger from `--ledger`, falling back to the environment
fn open_store(ledger: Option<PathBuf>) -> Result<LedgerStore> {
    let config = match ledger {
        Some(path) => LedgerConfig::new(path),
        None => LedgerConfig::from_env()?,
    };
    let store = LedgerStore::new(config, RecordCodec::new(job_types::builtin()));
    tracing::debug!(path = %store.path().display(), "using job ledger");
    Ok(store)
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}
