// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job type identifiers and the registry that defines which ones are valid.
//!
//! The set of job types is owned by whoever builds the registry (typically
//! the benchmark catalogue of the calling binary). Storage only consults it
//! to map a stored name back to a [`JobType`].

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A registered job type, identified by its canonical name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobType(Arc<str>);

impl JobType {
    /// Canonical name, as written to the ledger
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for JobType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Closed lookup table of valid job types
#[derive(Debug, Clone, Default)]
pub struct JobTypeRegistry {
    types: BTreeMap<String, JobType>,
}

impl JobTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job type by name, returning its typed value.
    ///
    /// Registering the same name twice returns the existing value.
    pub fn register(&mut self, name: impl Into<String>) -> JobType {
        let name = name.into();
        self.types
            .entry(name)
            .or_insert_with_key(|key| JobType(Arc::from(key.as_str())))
            .clone()
    }

    /// Map a stored name to its job type; names are case-sensitive
    pub fn lookup(&self, name: &str) -> Option<&JobType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for JobTypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.register(name);
        }
        registry
    }
}

#[cfg(test)]
#[path = "job_type_tests.rs"]
mod tests;
