// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Setup and teardown hooks scoped to an example group.

use crate::error::Outcome;
use crate::signal;
use std::fmt;

/// When a hook runs relative to each example in scope
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPhase {
    /// Before the example body, outermost group first
    Setup,
    /// After the example body, innermost group first
    Teardown,
}

/// Body shared by hooks and examples
pub(crate) type Body<C> = Box<dyn Fn(&mut C) -> Outcome>;

/// A deferred computation run once per example in its group's scope
pub struct Hook<C> {
    phase: HookPhase,
    body: Body<C>,
}

impl<C> Hook<C> {
    pub fn new<F>(phase: HookPhase, body: F) -> Self
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        Self {
            phase,
            body: Box::new(body),
        }
    }

    pub fn phase(&self) -> HookPhase {
        self.phase
    }

    /// Run the hook against the fixture context, returning the failure message
    pub fn invoke(&self, context: &mut C) -> Result<(), String> {
        signal::capture(|| (self.body)(context))
    }
}

impl<C> fmt::Debug for Hook<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").field("phase", &self.phase).finish()
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
