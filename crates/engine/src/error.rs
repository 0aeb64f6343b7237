// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by matchers, the group builder, and the suite.

use crate::group::GroupId;
use thiserror::Error;

/// Result of running a hook or example body.
///
/// Bodies may propagate any error with `?`; the error's display text is
/// the failure message reported for the example.
pub type Outcome = anyhow::Result<()>;

/// A matcher rejected its subject.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    /// Create a failure carrying a matcher message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The matcher message, verbatim
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The group tree was composed incorrectly while it was being declared.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A handle did not refer to a group in this tree
    #[error("unknown example group {0}")]
    UnknownGroup(GroupId),

    /// A shared group composed itself, directly or through another shared group
    #[error("shared examples '{name}' include themselves")]
    RecursiveSharedExamples { name: String },
}

/// Errors raised while selecting specifications from a suite.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    /// A requested specification name was never registered
    #[error("no specification named '{0}'")]
    UnknownSpecification(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
