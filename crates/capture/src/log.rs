// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared outcome log.

use crate::outcome::{CapturedExample, CapturedOutcome};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Log of example outcomes; clones share the same records
pub struct OutcomeLog {
    start: Instant,
    examples: Arc<Mutex<Vec<CapturedExample>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl OutcomeLog {
    /// Create an in-memory log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            examples: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a log that also appends each record to `path` as JSONL.
    ///
    /// Existing lines are kept, so several runs can share one file.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            ..Self::new()
        })
    }

    /// Record one example outcome
    pub fn record(&self, specification: &str, description: &str, outcome: CapturedOutcome) {
        let mut examples = self.examples.lock();
        let example = CapturedExample {
            seq: examples.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            specification: specification.to_string(),
            description: description.to_string(),
            outcome,
        };

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&example) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        examples.push(example);
    }

    /// All records in the order they were reported
    pub fn outcomes(&self) -> Vec<CapturedExample> {
        self.examples.lock().clone()
    }

    /// The last `n` records
    pub fn last(&self, n: usize) -> Vec<CapturedExample> {
        let all = self.examples.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    pub fn count<F: Fn(&CapturedExample) -> bool>(&self, pred: F) -> usize {
        self.examples.lock().iter().filter(|e| pred(e)).count()
    }

    /// Records whose description contains `pattern`
    pub fn find_by_description(&self, pattern: &str) -> Vec<CapturedExample> {
        self.filtered(|e| e.description.contains(pattern))
    }

    pub fn find_failures(&self) -> Vec<CapturedExample> {
        self.filtered(|e| matches!(e.outcome, CapturedOutcome::Failed { .. }))
    }

    pub fn find_passes(&self) -> Vec<CapturedExample> {
        self.filtered(CapturedExample::is_passed)
    }

    fn filtered<F: Fn(&CapturedExample) -> bool>(&self, pred: F) -> Vec<CapturedExample> {
        self.examples
            .lock()
            .iter()
            .filter(|e| pred(e))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.examples.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.lock().is_empty()
    }

    /// Drop the in-memory records; lines already written to file stay
    pub fn clear(&self) {
        self.examples.lock().clear();
    }
}

impl Default for OutcomeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OutcomeLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            examples: Arc::clone(&self.examples),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
