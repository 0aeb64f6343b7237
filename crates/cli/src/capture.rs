// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter that records every outcome into an [`OutcomeLog`].

use nestspec::{Reporter, Tally};
use nestspec_capture::{CapturedOutcome, OutcomeLog};

/// Wraps another reporter, logging each example before forwarding it
pub struct CapturingReporter<R> {
    inner: R,
    log: OutcomeLog,
    specification: String,
}

impl<R: Reporter> CapturingReporter<R> {
    pub fn new(inner: R, log: OutcomeLog) -> Self {
        Self {
            inner,
            log,
            specification: String::new(),
        }
    }

    pub fn log(&self) -> &OutcomeLog {
        &self.log
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for CapturingReporter<R> {
    fn tally(&self) -> &Tally {
        self.inner.tally()
    }

    fn tally_mut(&mut self) -> &mut Tally {
        self.inner.tally_mut()
    }

    fn begin_specification(&mut self, name: &str) {
        self.specification = name.to_string();
        self.inner.begin_specification(name);
    }

    fn pass(&mut self, description: &str) {
        self.log
            .record(&self.specification, description, CapturedOutcome::Passed);
        self.inner.pass(description);
    }

    fn fail(&mut self, description: &str, message: &str) {
        self.log.record(
            &self.specification,
            description,
            CapturedOutcome::Failed {
                message: message.to_string(),
            },
        );
        self.inner.fail(description, message);
    }

    fn summary(&mut self) {
        self.inner.summary();
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
