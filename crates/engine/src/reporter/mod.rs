// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting example outcomes.
//!
//! A [`Reporter`] receives one event per example and a final summary. It
//! owns the run's [`Tally`], which is the only place outcomes are counted.

pub mod stream;
pub mod tally;

pub use stream::StreamReporter;
pub use tally::{FailureRecord, Tally, TallyReporter};

/// Sink for example outcomes.
///
/// Implementors provide access to their tally and override the `on_*`
/// callbacks to render events. `pass` and `fail` update the tally before
/// calling the callbacks.
pub trait Reporter {
    fn tally(&self) -> &Tally;

    fn tally_mut(&mut self) -> &mut Tally;

    /// A specification is about to run
    fn begin_specification(&mut self, _name: &str) {}

    /// Render a passing example
    fn on_pass(&mut self, _description: &str) {}

    /// Render a failing example
    fn on_fail(&mut self, _description: &str, _message: &str) {}

    /// Render the aggregate outcome once, after every group has run
    fn summary(&mut self) {}

    fn pass(&mut self, description: &str) {
        self.tally_mut().record_pass();
        self.on_pass(description);
    }

    fn fail(&mut self, description: &str, message: &str) {
        self.tally_mut().record_failure(description, message);
        self.on_fail(description, message);
    }

    /// Whether every reported example passed
    fn is_success(&self) -> bool {
        self.tally().failed() == 0
    }
}
