// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured example records.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One reported example
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedExample {
    /// Position in the log, starting at 0
    pub seq: u64,
    pub timestamp: SystemTime,
    /// Time since the log was created
    #[serde(with = "crate::duration_serde")]
    pub elapsed: Duration,
    /// Name of the specification the example belongs to
    pub specification: String,
    pub description: String,
    pub outcome: CapturedOutcome,
}

impl CapturedExample {
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, CapturedOutcome::Passed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    Passed,
    Failed { message: String },
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
