// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate outcome counts for one run.

use super::Reporter;

/// A failed example with the message that failed it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureRecord {
    pub description: String,
    pub message: String,
}

/// Counts of reported examples and the failures among them
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    total: usize,
    passed: usize,
    failures: Vec<FailureRecord>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, description: &str, message: &str) {
        self.total += 1;
        self.failures.push(FailureRecord {
            description: description.to_string(),
            message: message.to_string(),
        });
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Failures in the order they were reported
    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }
}

/// A reporter that only counts
#[derive(Clone, Debug, Default)]
pub struct TallyReporter {
    tally: Tally,
}

impl TallyReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_tally(self) -> Tally {
        self.tally
    }
}

impl Reporter for TallyReporter {
    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
