// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn output(reporter: StreamReporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn pass_record_is_one_line() {
    let mut reporter = StreamReporter::new(Vec::new());
    reporter.pass("1 equals I");
    assert_eq!(output(reporter), "  OK: 1 equals I.\n");
}

#[test]
fn fail_record_is_two_lines() {
    let mut reporter = StreamReporter::new(Vec::new());
    reporter.fail("4 equals IV", "expected IIV, got IV");
    assert_eq!(
        output(reporter),
        "FAIL: 4 equals IV.\n      ERROR >> expected IIV, got IV\n"
    );
}

#[test]
fn all_pass_summary() {
    let mut reporter = StreamReporter::new(Vec::new());
    for description in ["1 equals I", "4 equals IV", "2014 equals MMXIV", "1988 equals MCMLXXXVIII"] {
        reporter.pass(description);
    }
    reporter.summary();

    let text = output(reporter);
    assert!(text.ends_with("-----\nPASS: 4 tests\n\n\n"), "got: {:?}", text);
}

#[test]
fn failure_digest_lists_every_failure() {
    let mut reporter = StreamReporter::new(Vec::new());
    reporter.pass("1 equals I");
    reporter.fail("4 equals IV", "expected IIV, got IV");
    reporter.fail("9 equals IX", "expected XI, got IX");
    reporter.summary();

    let expected = "  OK: 1 equals I.\n\
FAIL: 4 equals IV.\n      ERROR >> expected IIV, got IV\n\
FAIL: 9 equals IX.\n      ERROR >> expected XI, got IX\n\
-----\n\
Failed: 2 of 3 (1 passed)\n\n\
4 equals IV.\n      << ERROR >> expected IIV, got IV\n\n\
9 equals IX.\n      << ERROR >> expected XI, got IX\n\n\
\n";
    assert_eq!(output(reporter), expected);
}

#[test]
fn colored_labels() {
    let mut reporter = StreamReporter::new(Vec::new()).with_color(true);
    reporter.pass("green");
    reporter.fail("red", "boom");
    let text = output(reporter);
    assert!(text.contains("\x1b[32mOK\x1b[0m: green."));
    assert!(text.contains("\x1b[31mFAIL\x1b[0m: red."));
}

#[test]
fn stream_reporter_still_counts() {
    let mut reporter = StreamReporter::new(Vec::new());
    reporter.pass("a");
    reporter.fail("b", "c");
    assert_eq!(reporter.tally().total(), 2);
    assert_eq!(reporter.tally().failed(), 1);
}
