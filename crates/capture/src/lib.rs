// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome capture and recording for specification runs.
//!
//! Every reported example becomes a [`CapturedExample`] in an
//! [`OutcomeLog`], optionally mirrored to a JSONL file so a run can be
//! inspected after the fact.

mod duration_serde;
mod log;
mod outcome;

pub use log::OutcomeLog;
pub use outcome::{CapturedExample, CapturedOutcome};
