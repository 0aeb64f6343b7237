// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable report stream.
//!
//! ```text
//!   OK: 1 equals I.
//! FAIL: 4 equals IV.
//!       ERROR >> expected IIV, got IV
//! -----
//! Failed: 1 of 2 (1 passed)
//!
//! 4 equals IV.
//!       << ERROR >> expected IIV, got IV
//!
//!
//! ```

use super::{Reporter, Tally};
use std::io::Write;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Reporter writing one record per example and a digest at the end
pub struct StreamReporter<W: Write> {
    writer: W,
    tally: Tally,
    color: bool,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tally: Tally::new(),
            color: false,
        }
    }

    /// Colour the status labels with ANSI escapes
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, label: &str, code: &str) -> String {
        if self.color {
            format!("{}{}{}", code, label, RESET)
        } else {
            label.to_string()
        }
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }

    fn on_pass(&mut self, description: &str) {
        let label = self.paint("OK", GREEN);
        let _ = writeln!(self.writer, "  {}: {}.", label, description);
    }

    fn on_fail(&mut self, description: &str, message: &str) {
        let label = self.paint("FAIL", RED);
        let _ = writeln!(
            self.writer,
            "{}: {}.\n      ERROR >> {}",
            label, description, message
        );
    }

    fn summary(&mut self) {
        let _ = writeln!(self.writer, "-----");

        if self.tally.failed() > 0 {
            let label = self.paint("Failed", RED);
            let _ = writeln!(
                self.writer,
                "{}: {} of {} ({} passed)\n",
                label,
                self.tally.failed(),
                self.tally.total(),
                self.tally.passed()
            );
            for failure in self.tally.failures() {
                let _ = writeln!(
                    self.writer,
                    "{}.\n      << ERROR >> {}\n",
                    failure.description, failure.message
                );
            }
        } else {
            let label = self.paint("PASS", GREEN);
            let _ = writeln!(self.writer, "{}: {} tests\n", label, self.tally.total());
        }

        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
