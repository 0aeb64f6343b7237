// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expectation facade over the matcher library.
//!
//! [`expect`] wraps a subject and picks its category from the subject's
//! type. The category decides which matchers the `should` and
//! `should_not` verifiers expose:
//!
//! | Subject | Category | Matchers |
//! |---------|----------|----------|
//! | numbers, `char`, `String`, `&str`, opted-in types | [`Value`] | `equal` |
//! | `Option<T>` | [`Nilable`] | `equal`, `be_nil` |
//! | `bool` | [`Boolean`] | `be_true`, `be_false` |
//! | [`Block`] (see [`block`]) | [`Computation`] | `raise` |
//!
//! ```
//! use nestspec::expectation::{block, expect};
//!
//! # fn main() -> Result<(), nestspec::AssertionFailure> {
//! expect(2 + 2).should().equal(4)?;
//! expect("IV".to_string()).should_not().equal("IIV")?;
//! expect(None::<u8>).should().be_nil()?;
//! expect(3 > 2).should().be_true()?;
//! expect(block(|| "x".parse::<i32>())).should().raise("invalid digit found in string")?;
//! # Ok(())
//! # }
//! ```

use crate::error::AssertionFailure;
use crate::matcher::{BeFalse, BeNil, BeTrue, Equal, EqualSome, Matcher, Polarity, Raise};
use crate::signal;
use std::fmt::Display;
use std::marker::PhantomData;

/// Category of plain comparable values
#[derive(Clone, Copy, Debug)]
pub struct Value;

/// Category of values that may be absent
#[derive(Clone, Copy, Debug)]
pub struct Nilable;

/// Category of booleans
#[derive(Clone, Copy, Debug)]
pub struct Boolean;

/// Category of deferred computations that may fail
#[derive(Clone, Copy, Debug)]
pub struct Computation;

/// A type that can be the subject of an expectation
pub trait Subject {
    /// Category selecting the available matchers
    type Category;
}

/// Opt types into the [`Value`] category so they get `equal`.
///
/// The types must implement `PartialEq` and `Display` for `equal` to be
/// callable.
#[macro_export]
macro_rules! value_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::expectation::Subject for $ty {
                type Category = $crate::expectation::Value;
            }
        )*
    };
}

value_subject!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
);

impl Subject for &str {
    type Category = Value;
}

impl Subject for bool {
    type Category = Boolean;
}

impl<T> Subject for Option<T> {
    type Category = Nilable;
}

impl<F> Subject for Block<F> {
    type Category = Computation;
}

/// A deferred zero-argument computation used as an expectation subject
pub struct Block<F>(F);

/// Wrap a computation so `expect` treats it as a [`Computation`].
///
/// The computation signals failure by returning `Err` or by panicking.
pub fn block<R, E, F>(f: F) -> Block<F>
where
    F: Fn() -> Result<R, E>,
    E: Display,
{
    Block(f)
}

/// Wrap a subject for assertion
pub fn expect<T: Subject>(subject: T) -> Expectation<T, T::Category> {
    Expectation {
        subject,
        category: PhantomData,
    }
}

/// A subject paired with its category
pub struct Expectation<T, C> {
    subject: T,
    category: PhantomData<C>,
}

impl<T, C> Expectation<T, C> {
    /// Affirmative verifier
    pub fn should(&self) -> Verifier<'_, T, C> {
        self.verifier(Polarity::Affirmative)
    }

    /// Negated verifier
    pub fn should_not(&self) -> Verifier<'_, T, C> {
        self.verifier(Polarity::Negated)
    }

    /// The wrapped subject
    pub fn subject(&self) -> &T {
        &self.subject
    }

    fn verifier(&self, polarity: Polarity) -> Verifier<'_, T, C> {
        Verifier {
            subject: &self.subject,
            polarity,
            category: PhantomData,
        }
    }
}

/// Matchers for one subject under one polarity
pub struct Verifier<'a, T, C> {
    subject: &'a T,
    polarity: Polarity,
    category: PhantomData<C>,
}

impl<T, C> Verifier<'_, T, C> {
    /// Whether this verifier is `should` or `should_not`
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<T> Verifier<'_, T, Value> {
    pub fn equal<E>(&self, expected: E) -> Result<(), AssertionFailure>
    where
        T: PartialEq<E> + Display,
        E: Display,
    {
        Equal::new(expected).check(self.subject, self.polarity)
    }
}

impl<T> Verifier<'_, Option<T>, Nilable> {
    /// Compare the present value; an absent subject is never equal
    pub fn equal<E>(&self, expected: E) -> Result<(), AssertionFailure>
    where
        T: PartialEq<E> + Display,
        E: Display,
    {
        EqualSome::new(expected).check(self.subject, self.polarity)
    }

    pub fn be_nil(&self) -> Result<(), AssertionFailure> {
        BeNil.check(self.subject, self.polarity)
    }
}

impl Verifier<'_, bool, Boolean> {
    pub fn be_true(&self) -> Result<(), AssertionFailure> {
        BeTrue.check(self.subject, self.polarity)
    }

    pub fn be_false(&self) -> Result<(), AssertionFailure> {
        BeFalse.check(self.subject, self.polarity)
    }
}

impl<R, E, F> Verifier<'_, Block<F>, Computation>
where
    F: Fn() -> Result<R, E>,
    E: Display,
{
    /// Run the computation and match the failure it signals.
    ///
    /// An empty `expected` accepts any failure message.
    pub fn raise(&self, expected: &str) -> Result<(), AssertionFailure> {
        let compute = &self.subject.0;
        let signal = signal::capture(compute).err();
        Raise::new(expected).check(&signal, self.polarity)
    }

    /// Run the computation and accept any failure it signals
    pub fn raise_any(&self) -> Result<(), AssertionFailure> {
        self.raise("")
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
