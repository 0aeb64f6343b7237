// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn message(result: Result<(), AssertionFailure>) -> String {
    result.unwrap_err().message().to_string()
}

#[parameterized(
    affirmative_match = { Polarity::Affirmative, true, true },
    affirmative_miss = { Polarity::Affirmative, false, false },
    negated_match = { Polarity::Negated, true, false },
    negated_miss = { Polarity::Negated, false, true },
)]
fn polarity_holds(polarity: Polarity, matched: bool, expected: bool) {
    assert_eq!(polarity.holds(matched), expected);
}

#[test]
fn equal_passes_on_equal_values() {
    assert!(Equal::new(4).check(&4, Polarity::Affirmative).is_ok());
    assert!(Equal::new("IV").check(&"IV", Polarity::Affirmative).is_ok());
}

#[test]
fn equal_reports_expected_and_actual() {
    let result = Equal::new("IIV").check(&"IV".to_string(), Polarity::Affirmative);
    assert_eq!(message(result), "expected IIV, got IV");
}

#[test]
fn negated_equal_reports_expected_only() {
    let result = Equal::new(7).check(&7, Polarity::Negated);
    assert_eq!(message(result), "should not be equal to 7");
}

#[test]
fn equal_some_compares_the_pointee() {
    assert!(EqualSome::new(3).check(&Some(3), Polarity::Affirmative).is_ok());
    let result = EqualSome::new(3).check(&Some(4), Polarity::Affirmative);
    assert_eq!(message(result), "expected 3, got 4");
}

#[test]
fn equal_some_renders_absent_subject_as_nil() {
    let result = EqualSome::new(3).check(&None::<i32>, Polarity::Affirmative);
    assert_eq!(message(result), "expected 3, got Nil");
    assert!(EqualSome::new(3).check(&None::<i32>, Polarity::Negated).is_ok());
}

#[parameterized(
    nil_affirmative = { None, Polarity::Affirmative, None },
    nil_negated = { None, Polarity::Negated, Some("expected not to be Nil") },
    value_affirmative = { Some(1), Polarity::Affirmative, Some("expected Nil") },
    value_negated = { Some(1), Polarity::Negated, None },
)]
fn be_nil(subject: Option<i32>, polarity: Polarity, failure: Option<&str>) {
    let result = BeNil.check(&subject, polarity);
    assert_eq!(result.err().map(|e| e.message().to_string()).as_deref(), failure);
}

#[parameterized(
    true_is_true = { true, Polarity::Affirmative, None },
    false_is_not_true = { false, Polarity::Affirmative, Some("expected true") },
    true_should_not_be_true = { true, Polarity::Negated, Some("expected false") },
    false_should_not_be_true = { false, Polarity::Negated, None },
)]
fn be_true(subject: bool, polarity: Polarity, failure: Option<&str>) {
    let result = BeTrue.check(&subject, polarity);
    assert_eq!(result.err().map(|e| e.message().to_string()).as_deref(), failure);
}

#[parameterized(
    false_is_false = { false, Polarity::Affirmative, None },
    true_is_not_false = { true, Polarity::Affirmative, Some("expected false") },
    false_should_not_be_false = { false, Polarity::Negated, Some("expected true") },
    true_should_not_be_false = { true, Polarity::Negated, None },
)]
fn be_false(subject: bool, polarity: Polarity, failure: Option<&str>) {
    let result = BeFalse.check(&subject, polarity);
    assert_eq!(result.err().map(|e| e.message().to_string()).as_deref(), failure);
}

#[test]
fn raise_accepts_exact_message() {
    let signal = Some("boom".to_string());
    assert!(Raise::new("boom").check(&signal, Polarity::Affirmative).is_ok());
}

#[test]
fn raise_quotes_both_messages_on_mismatch() {
    let signal = Some("boom".to_string());
    let result = Raise::new("other").check(&signal, Polarity::Affirmative);
    assert_eq!(message(result), "Expected 'other', got 'boom'");
}

#[test]
fn raise_any_accepts_every_failure() {
    let signal = Some("anything at all".to_string());
    assert!(Raise::any().check(&signal, Polarity::Affirmative).is_ok());
}

#[test]
fn raise_without_signal_fails() {
    let result = Raise::any().check(&None, Polarity::Affirmative);
    assert_eq!(message(result), "exception was not received");
}

#[test]
fn negated_raise() {
    assert!(Raise::any().check(&None, Polarity::Negated).is_ok());
    assert!(Raise::new("other")
        .check(&Some("boom".to_string()), Polarity::Negated)
        .is_ok());

    let any = Raise::any().check(&Some("boom".to_string()), Polarity::Negated);
    assert_eq!(message(any), "exception was received: 'boom'");

    let exact = Raise::new("boom").check(&Some("boom".to_string()), Polarity::Negated);
    assert_eq!(message(exact), "expected not to receive 'boom'");
}

proptest! {
    #[test]
    fn exactly_one_polarity_passes_for_equal(actual in any::<i64>(), expected in any::<i64>()) {
        let matcher = Equal::new(expected);
        let should = matcher.check(&actual, Polarity::Affirmative).is_ok();
        let should_not = matcher.check(&actual, Polarity::Negated).is_ok();
        prop_assert!(should != should_not);
        prop_assert_eq!(should, actual == expected);
    }

    #[test]
    fn exactly_one_polarity_passes_for_raise(
        signal in proptest::option::of("[a-z]{0,8}"),
        expected in "[a-z]{0,3}",
    ) {
        let matcher = Raise::new(expected);
        let should = matcher.check(&signal, Polarity::Affirmative).is_ok();
        let should_not = matcher.check(&signal, Polarity::Negated).is_ok();
        prop_assert!(should != should_not);
    }
}
