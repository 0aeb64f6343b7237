// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nestspec runner
//!
//! Builds the bundled specifications, runs the selected ones through the
//! stream reporter, and optionally records every outcome to a JSONL file.

pub mod capture;
pub mod cli;
pub mod config;
pub mod demos;
pub mod env;
pub mod output_diagnostic;
pub mod runner;
pub mod specs;
