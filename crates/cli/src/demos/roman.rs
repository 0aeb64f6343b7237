// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integer to Roman numeral conversion.

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts positive integers using subtractive notation
#[derive(Clone, Copy, Debug, Default)]
pub struct RomanNumerals;

impl RomanNumerals {
    pub fn new() -> Self {
        Self
    }

    /// Zero yields an empty string
    pub fn roman(&self, mut n: u32) -> String {
        let mut out = String::new();
        for (value, symbol) in NUMERALS {
            while n >= value {
                out.push_str(symbol);
                n -= value;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "roman_tests.rs"]
mod tests;
