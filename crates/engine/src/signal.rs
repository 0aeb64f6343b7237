// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capturing failures signaled by author-supplied computations.
//!
//! A computation signals failure either by returning an error or by
//! panicking. Both are turned into the message that gets reported.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// Run `f`, converting an error or a panic into its message.
pub fn capture<R, E, F>(f: F) -> Result<R, String>
where
    F: FnOnce() -> Result<R, E>,
    E: Display,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

/// Extract the text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
