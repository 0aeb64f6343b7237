// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Left-associative `+`/`-` arithmetic over non-negative integer literals.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not continue with a digit where an operand belongs
    #[error("Expected number")]
    ExpectedNumber,

    /// An operand was followed by something other than `+` or `-`
    #[error("Expected operator")]
    ExpectedOperator,

    /// An operator was left without a right-hand operand
    #[error("Format error")]
    Format,

    /// A literal or intermediate result does not fit in `i32`
    #[error("Number out of range")]
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
}

impl Operator {
    fn apply(self, left: i32, right: i32) -> Result<i32, ParseError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
        };
        result.ok_or(ParseError::OutOfRange)
    }
}

/// Cursor over the unconsumed input
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Consume a run of ASCII digits; `None` if there is none
    fn number(&mut self) -> Result<Option<i32>, ParseError> {
        let len = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if len == 0 {
            return Ok(None);
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        digits
            .parse()
            .map(Some)
            .map_err(|_| ParseError::OutOfRange)
    }

    fn operator(&mut self) -> Option<Operator> {
        let op = match self.rest.chars().next()? {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            _ => return None,
        };
        self.rest = &self.rest[1..];
        Some(op)
    }
}

/// Evaluates expressions such as `10-4+2`
#[derive(Clone, Copy, Debug, Default)]
pub struct MathParser;

impl MathParser {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `text`; empty input is 0 and whitespace is not accepted
    pub fn parse(&self, text: &str) -> Result<i32, ParseError> {
        let mut scanner = Scanner::new(text);
        let mut total: Option<i32> = None;
        let mut pending: Option<Operator> = None;

        while !scanner.at_end() {
            let value = scanner.number()?.ok_or(ParseError::ExpectedNumber)?;
            total = Some(match (total, pending.take()) {
                (Some(left), Some(op)) => op.apply(left, value)?,
                _ => value,
            });

            if !scanner.at_end() {
                pending = Some(scanner.operator().ok_or(ParseError::ExpectedOperator)?);
            }
        }

        if pending.is_some() {
            return Err(ParseError::Format);
        }
        Ok(total.unwrap_or(0))
    }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
