// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for stamping dispatch times

use chrono::{Duration, Local, NaiveDateTime, SubsecRound};
use std::sync::{Arc, Mutex};

/// Digits of sub-second precision kept by the ledger's timestamp format
pub const SUBSEC_DIGITS: u16 = 6;

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    /// Current local time, truncated to microseconds
    fn now(&self) -> NaiveDateTime;
}

/// Real system clock (local time)
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(SUBSEC_DIGITS)
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start.trunc_subsecs(SUBSEC_DIGITS))),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = (*current + duration).trunc_subsecs(SUBSEC_DIGITS);
    }

    /// Set the clock to a specific time
    pub fn set(&self, time: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = time.trunc_subsecs(SUBSEC_DIGITS);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(NaiveDateTime::default())
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
