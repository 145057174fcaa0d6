// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger location

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable that overrides the ledger path
pub const LEDGER_PATH_ENV: &str = "JL_LEDGER_PATH";

const LEDGER_FILE_NAME: &str = "jobs.jsonl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a state directory; set JL_LEDGER_PATH or HOME")]
    NoStateDir,
}

/// Where the ledger lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub path: PathBuf,
}

impl LedgerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve from the process environment.
    ///
    /// `JL_LEDGER_PATH` wins; otherwise `$XDG_STATE_HOME/jl/jobs.jsonl`,
    /// falling back to `~/.local/state/jl/jobs.jsonl`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var_os(key), dirs::home_dir)
    }

    fn resolve(
        env: impl Fn(&str) -> Option<OsString>,
        home_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(path) = non_empty(LEDGER_PATH_ENV) {
            return Ok(Self::new(path));
        }

        let state_dir = match non_empty("XDG_STATE_HOME") {
            Some(xdg) => PathBuf::from(xdg).join("jl"),
            None => {
                let home = home_dir().ok_or(ConfigError::NoStateDir)?;
                home.join(".local/state/jl")
            }
        };

        Ok(Self::new(state_dir.join(LEDGER_FILE_NAME)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
