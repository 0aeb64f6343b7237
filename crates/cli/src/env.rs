// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by nestspec are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `NO_COLOR`: any non-empty value turns automatic colour off.
pub fn no_color() -> bool {
    is_set(std::env::var(names::NO_COLOR).ok())
}

fn is_set(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
