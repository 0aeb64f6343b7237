// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `RomanNumerals`: one example per known conversion.

use crate::demos::RomanNumerals;
use nestspec::{expect, BuildError, Specification};

const CONVERSIONS: [(u32, &str); 19] = [
    (1, "I"),
    (2, "II"),
    (3, "III"),
    (4, "IV"),
    (5, "V"),
    (6, "VI"),
    (7, "VII"),
    (8, "VIII"),
    (9, "IX"),
    (10, "X"),
    (50, "L"),
    (100, "C"),
    (500, "D"),
    (1000, "M"),
    (2014, "MMXIV"),
    (1988, "MCMLXXXVIII"),
    (1998, "MCMXCVIII"),
    (449, "CDXLIX"),
    (3333, "MMMCCCXXXIII"),
];

#[derive(Default)]
pub struct Fixture {
    sut: Option<RomanNumerals>,
}

pub fn specification() -> Result<Specification<Fixture>, BuildError> {
    Specification::build("RomanNumerals", |g| {
        g.before_each(|f: &mut Fixture| {
            f.sut = Some(RomanNumerals::new());
            Ok(())
        });

        for (n, roman) in CONVERSIONS {
            g.it(format!("{} equals {}", n, roman), move |f| {
                let converted = f.sut.map(|sut| sut.roman(n));
                expect(converted).should().equal(roman)?;
                Ok(())
            });
        }
    })
}
