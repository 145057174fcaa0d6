// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only job ledger backed by a JSONL file

use crate::codec::{DecodeError, RecordCodec};
use crate::config::LedgerConfig;
use jl_core::JobRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur in ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Job ledger stored as one JSON record per line.
///
/// No file handle is kept between calls. Each operation opens the file,
/// does its I/O and closes it again.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
    codec: RecordCodec,
}

impl LedgerStore {
    pub fn new(config: LedgerConfig, codec: RecordCodec) -> Self {
        Self {
            path: config.path,
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &RecordCodec {
        &self.codec
    }

    /// Append a record, creating the ledger if needed, and sync it to disk
    pub fn append(&self, record: &JobRecord) -> Result<(), LedgerError> {
        let line = self.codec.encode(record)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // Terminate a final line left without a newline before adding ours
        let mut buf = String::with_capacity(line.len() + 2);
        if !ends_with_newline(&mut file)? {
            buf.push('\n');
        }
        buf.push_str(&line);
        buf.push('\n');
        file.write_all(buf.as_bytes())?;
        file.sync_all()?;

        debug!(id = %record.id, path = %self.path.display(), "appended job record");
        Ok(())
    }

    /// Load every decodable record in file order.
    ///
    /// Blank lines are skipped silently. Lines that fail to decode are
    /// skipped with one warning each. Only I/O failures are returned.
    pub fn load_all(&self) -> Result<Vec<JobRecord>, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line_number = index + 1;

            let decoded = match std::str::from_utf8(&bytes) {
                Ok(line) => {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.codec.decode(line)
                }
                Err(e) => Err(DecodeError::MalformedJson {
                    column: e.valid_up_to() + 1,
                    message: "invalid UTF-8".to_string(),
                }),
            };

            match decoded {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    self.report(line_number, &err);
                }
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = records.len(),
            skipped,
            "loaded job ledger"
        );
        Ok(records)
    }

    /// Find a record by exact id, or by an unambiguous id prefix.
    ///
    /// With duplicate ids the earliest record wins.
    pub fn find(&self, id: &str) -> Result<Option<JobRecord>, LedgerError> {
        let records = self.load_all()?;

        if let Some(record) = records.iter().find(|r| r.id == id) {
            return Ok(Some(record.clone()));
        }

        let mut matches = records.into_iter().filter(|r| r.matches_id(id));
        let Some(first) = matches.next() else {
            return Ok(None);
        };
        if matches.any(|r| r.id != first.id) {
            return Ok(None);
        }
        Ok(Some(first))
    }

    fn report(&self, line_number: usize, err: &DecodeError) {
        warn!(
            path = %self.path.display(),
            line = line_number,
            category = err.category(),
            "skipping job ledger entry: {} (in {})",
            err,
            self.path.display()
        );
    }
}

/// True if the file is empty or its last byte is `\n`
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
