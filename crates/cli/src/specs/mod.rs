// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specifications bundled with the runner.

pub mod math;
pub mod roman;

use nestspec::{BuildError, Suite};

/// Every bundled specification, in run order
pub fn suite() -> Result<Suite, BuildError> {
    let mut suite = Suite::new();
    suite
        .register(roman::specification()?)
        .register(math::specification()?);
    Ok(suite)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
