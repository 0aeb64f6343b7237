// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Examples: named test cases with deferred bodies.

use crate::error::Outcome;
use crate::hook::Body;
use crate::signal;
use std::fmt;

/// One named test case
pub struct Example<C> {
    description: String,
    body: Body<C>,
}

impl<C> Example<C> {
    pub fn new<F>(description: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        Self {
            description: description.into(),
            body: Box::new(body),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the body against the fixture context, returning the failure message
    pub fn invoke(&self, context: &mut C) -> Result<(), String> {
        signal::capture(|| (self.body)(context))
    }
}

impl<C> fmt::Debug for Example<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("description", &self.description)
            .finish()
    }
}

/// Result of running one example with its hooks
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExampleOutcome {
    Passed,
    Failed { message: String },
}

impl ExampleOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, ExampleOutcome::Passed)
    }

    /// Keep the first failure; later failures never replace it
    pub fn record(&mut self, result: Result<(), String>) {
        if !self.is_passed() {
            return;
        }
        if let Err(message) = result {
            *self = ExampleOutcome::Failed { message };
        }
    }
}

#[cfg(test)]
#[path = "example_tests.rs"]
mod tests;
