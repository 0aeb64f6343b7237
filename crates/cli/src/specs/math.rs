// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `MathExpressions`: values, operators, and parse errors.

use crate::demos::{MathParser, ParseError};
use nestspec::{block, expect, BuildError, GroupBuilder, SharedExamples, Specification};

#[derive(Default)]
pub struct Fixture {
    parser: MathParser,
    input: &'static str,
    expected: i32,
}

impl Fixture {
    fn parse(&self, text: &str) -> Result<i32, ParseError> {
        self.parser.parse(text)
    }
}

/// Declare one example asserting that `text` evaluates to `value`
fn evaluates(g: &mut GroupBuilder<'_, Fixture>, text: &'static str, value: i32) {
    g.it(format!("{} is {}", display(text), value), move |f| {
        expect(f.parse(text)?).should().equal(value)?;
        Ok(())
    });
}

/// Declare one example asserting that `text` is rejected with `message`
fn rejects(g: &mut GroupBuilder<'_, Fixture>, text: &'static str, message: &'static str) {
    g.it(format!("{} raises {}", display(text), message), move |f| {
        let parser = f.parser;
        expect(block(move || parser.parse(text)))
            .should()
            .raise(message)?;
        Ok(())
    });
}

fn display(text: &str) -> String {
    if text.is_empty() {
        "empty input".to_string()
    } else {
        format!("'{}'", text)
    }
}

fn well_formed_sum() -> SharedExamples<Fixture> {
    SharedExamples::new("a well-formed sum", |g: &mut GroupBuilder<'_, Fixture>| {
        g.it("evaluates to the expected total", |f| {
            expect(f.parse(f.input)?).should().equal(f.expected)?;
            Ok(())
        });
        g.it("does not raise", |f| {
            let (parser, input) = (f.parser, f.input);
            expect(block(move || parser.parse(input)))
                .should_not()
                .raise_any()?;
            Ok(())
        });
    })
}

pub fn specification() -> Result<Specification<Fixture>, BuildError> {
    let sum = well_formed_sum();

    Specification::build("MathExpressions", |g| {
        g.before_each(|f: &mut Fixture| {
            f.parser = MathParser::new();
            Ok(())
        });

        g.describe("values", |g| {
            evaluates(g, "", 0);
            evaluates(g, "1", 1);
            evaluates(g, "42", 42);
        });

        g.describe("addition", |g| {
            evaluates(g, "1+2", 3);
            evaluates(g, "20+22", 42);
        });

        g.describe("subtraction", |g| {
            evaluates(g, "5-3", 2);
            evaluates(g, "3-5", -2);
        });

        g.describe("chained operations", |g| {
            evaluates(g, "1+2+3", 6);
            evaluates(g, "10-4+2", 8);
        });

        g.describe("errors", |g| {
            rejects(g, "+1", "Expected number");
            rejects(g, "1 2", "Expected operator");
            rejects(g, "1+", "Format error");
        });

        g.describe("sums", |g| {
            g.context("with single digits", |g| {
                g.before_each(|f| {
                    f.input = "1+2";
                    f.expected = 3;
                    Ok(())
                });
                g.behaves_like(&sum);
            });
            g.context("with several digits", |g| {
                g.before_each(|f| {
                    f.input = "100+23";
                    f.expected = 123;
                    Ok(())
                });
                g.behaves_like(&sum);
            });
        });
    })
}
