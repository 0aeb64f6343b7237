// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small programs the bundled specifications describe.

pub mod math;
pub mod roman;

pub use math::{MathParser, ParseError};
pub use roman::RomanNumerals;
