// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn generated_names_match_variables() {
    assert_eq!(NESTSPEC_CONFIG, "NESTSPEC_CONFIG");
    assert_eq!(NESTSPEC_CAPTURE, "NESTSPEC_CAPTURE");
    assert_eq!(NO_COLOR, "NO_COLOR");
}

#[test]
fn empty_value_is_unset() {
    assert!(!is_set(None));
    assert!(!is_set(Some(String::new())));
    assert!(is_set(Some("1".to_string())));
}
