// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion primitives.
//!
//! Each matcher is a predicate over a subject plus the two messages it
//! reports: one when an affirmative check fails and one when a negated
//! check fails. [`Matcher::check`] applies a [`Polarity`] and turns the
//! result into an [`AssertionFailure`].

use crate::error::AssertionFailure;
use std::fmt::Display;

/// Whether a matcher is asserted or negated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// `should`
    Affirmative,
    /// `should_not`
    Negated,
}

impl Polarity {
    /// Apply this polarity to a raw match result
    pub fn holds(self, matched: bool) -> bool {
        match self {
            Polarity::Affirmative => matched,
            Polarity::Negated => !matched,
        }
    }
}

/// A predicate over a subject with its failure messages
pub trait Matcher<A: ?Sized> {
    /// Whether the subject satisfies the matcher
    fn matches(&self, actual: &A) -> bool;

    /// Message reported when an affirmative check fails
    fn failure_message(&self, actual: &A) -> String;

    /// Message reported when a negated check fails
    fn negated_failure_message(&self, actual: &A) -> String;

    /// Run the matcher under the given polarity
    fn check(&self, actual: &A, polarity: Polarity) -> Result<(), AssertionFailure> {
        if polarity.holds(self.matches(actual)) {
            return Ok(());
        }
        let message = match polarity {
            Polarity::Affirmative => self.failure_message(actual),
            Polarity::Negated => self.negated_failure_message(actual),
        };
        Err(AssertionFailure::new(message))
    }
}

/// Equality against an expected value
#[derive(Clone, Debug)]
pub struct Equal<E> {
    expected: E,
}

impl<E> Equal<E> {
    pub fn new(expected: E) -> Self {
        Self { expected }
    }
}

impl<A, E> Matcher<A> for Equal<E>
where
    A: PartialEq<E> + Display + ?Sized,
    E: Display,
{
    fn matches(&self, actual: &A) -> bool {
        *actual == self.expected
    }

    fn failure_message(&self, actual: &A) -> String {
        format!("expected {}, got {}", self.expected, actual)
    }

    fn negated_failure_message(&self, _actual: &A) -> String {
        format!("should not be equal to {}", self.expected)
    }
}

/// Equality against the value behind an optional subject.
///
/// An absent subject never matches and renders as `Nil`.
#[derive(Clone, Debug)]
pub struct EqualSome<E> {
    expected: E,
}

impl<E> EqualSome<E> {
    pub fn new(expected: E) -> Self {
        Self { expected }
    }
}

impl<T, E> Matcher<Option<T>> for EqualSome<E>
where
    T: PartialEq<E> + Display,
    E: Display,
{
    fn matches(&self, actual: &Option<T>) -> bool {
        actual.as_ref().is_some_and(|value| *value == self.expected)
    }

    fn failure_message(&self, actual: &Option<T>) -> String {
        match actual {
            Some(value) => format!("expected {}, got {}", self.expected, value),
            None => format!("expected {}, got Nil", self.expected),
        }
    }

    fn negated_failure_message(&self, _actual: &Option<T>) -> String {
        format!("should not be equal to {}", self.expected)
    }
}

/// Absence of a value
#[derive(Clone, Copy, Debug, Default)]
pub struct BeNil;

impl<T> Matcher<Option<T>> for BeNil {
    fn matches(&self, actual: &Option<T>) -> bool {
        actual.is_none()
    }

    fn failure_message(&self, _actual: &Option<T>) -> String {
        "expected Nil".to_string()
    }

    fn negated_failure_message(&self, _actual: &Option<T>) -> String {
        "expected not to be Nil".to_string()
    }
}

/// A `true` subject
#[derive(Clone, Copy, Debug, Default)]
pub struct BeTrue;

impl Matcher<bool> for BeTrue {
    fn matches(&self, actual: &bool) -> bool {
        *actual
    }

    fn failure_message(&self, _actual: &bool) -> String {
        "expected true".to_string()
    }

    fn negated_failure_message(&self, _actual: &bool) -> String {
        "expected false".to_string()
    }
}

/// A `false` subject
#[derive(Clone, Copy, Debug, Default)]
pub struct BeFalse;

impl Matcher<bool> for BeFalse {
    fn matches(&self, actual: &bool) -> bool {
        !*actual
    }

    fn failure_message(&self, _actual: &bool) -> String {
        "expected false".to_string()
    }

    fn negated_failure_message(&self, _actual: &bool) -> String {
        "expected true".to_string()
    }
}

/// A computation that signaled a failure.
///
/// The subject is what running the computation produced: `None` when it
/// completed, `Some(message)` when it failed. An empty expected message
/// accepts any failure.
#[derive(Clone, Debug, Default)]
pub struct Raise {
    expected: String,
}

impl Raise {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Accept any signaled failure
    pub fn any() -> Self {
        Self::default()
    }
}

impl Matcher<Option<String>> for Raise {
    fn matches(&self, actual: &Option<String>) -> bool {
        match actual {
            Some(message) => self.expected.is_empty() || *message == self.expected,
            None => false,
        }
    }

    fn failure_message(&self, actual: &Option<String>) -> String {
        match actual {
            Some(message) => format!("Expected '{}', got '{}'", self.expected, message),
            None => "exception was not received".to_string(),
        }
    }

    fn negated_failure_message(&self, actual: &Option<String>) -> String {
        if self.expected.is_empty() {
            let message = actual.as_deref().unwrap_or_default();
            format!("exception was received: '{}'", message)
        } else {
            format!("expected not to receive '{}'", self.expected)
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
