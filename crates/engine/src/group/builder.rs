// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closure-based authoring surface for example groups.
//!
//! ```
//! use nestspec::{expect, Specification};
//!
//! #[derive(Default)]
//! struct Stack {
//!     items: Vec<u32>,
//! }
//!
//! let spec = Specification::build("Stack", |g| {
//!     g.before_each(|stack: &mut Stack| {
//!         stack.items.clear();
//!         Ok(())
//!     });
//!     g.context("after a push", |g| {
//!         g.before_each(|stack| {
//!             stack.items.push(7);
//!             Ok(())
//!         });
//!         g.it("is not empty", |stack| {
//!             expect(stack.items.is_empty()).should().be_false()?;
//!             Ok(())
//!         });
//!     });
//! })
//! .unwrap();
//! assert_eq!(spec.example_count(), 1);
//! ```

use super::{GroupId, GroupTree};
use crate::error::{BuildError, Outcome};
use std::fmt;
use std::rc::Rc;

/// Build-phase bookkeeping shared by every builder of one tree
#[derive(Debug, Default)]
pub(crate) struct BuildState {
    error: Option<BuildError>,
    /// Identity of each shared body currently being composed
    shared_stack: Vec<*const ()>,
}

impl BuildState {
    /// Keep the first error; the tree is invalid from that point on
    fn record(&mut self, result: Result<(), BuildError>) {
        if self.error.is_some() {
            return;
        }
        self.error = result.err();
    }

    pub(crate) fn finish(self) -> Result<(), BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Declares hooks, examples, and nested groups inside one group
pub struct GroupBuilder<'a, C> {
    tree: &'a mut GroupTree<C>,
    state: &'a mut BuildState,
    id: GroupId,
}

impl<'a, C> GroupBuilder<'a, C> {
    pub(crate) fn new(tree: &'a mut GroupTree<C>, state: &'a mut BuildState, id: GroupId) -> Self {
        Self { tree, state, id }
    }

    /// Handle of the group being declared
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Declare a nested group
    pub fn describe<F>(&mut self, description: impl Into<String>, declare: F) -> &mut Self
    where
        F: FnOnce(&mut GroupBuilder<'_, C>),
    {
        match self.tree.add_child_group(self.id, description) {
            Ok(child) => {
                let mut builder = GroupBuilder::new(&mut *self.tree, &mut *self.state, child);
                declare(&mut builder);
            }
            Err(err) => self.state.record(Err(err)),
        }
        self
    }

    /// Declare a nested group; reads better for a condition or state
    pub fn context<F>(&mut self, description: impl Into<String>, declare: F) -> &mut Self
    where
        F: FnOnce(&mut GroupBuilder<'_, C>),
    {
        self.describe(description, declare)
    }

    /// Declare an example
    pub fn it<F>(&mut self, description: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        let result = self.tree.add_example(self.id, description, body);
        self.state.record(result);
        self
    }

    /// Declare a setup hook for every example in this group and below
    pub fn before_each<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        let result = self.tree.add_setup_hook(self.id, body);
        self.state.record(result);
        self
    }

    /// Declare a teardown hook for every example in this group and below
    pub fn after_each<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        let result = self.tree.add_teardown_hook(self.id, body);
        self.state.record(result);
        self
    }

    /// Compose a shared group's declarations into this group
    pub fn behaves_like(&mut self, shared: &SharedExamples<C>) -> &mut Self {
        let key = shared.key();
        if self.state.shared_stack.contains(&key) {
            self.state.record(Err(BuildError::RecursiveSharedExamples {
                name: shared.name().to_string(),
            }));
            return self;
        }

        self.state.shared_stack.push(key);
        (shared.declare)(self);
        self.state.shared_stack.pop();
        self
    }
}

type Declare<C> = dyn Fn(&mut GroupBuilder<'_, C>);

/// A named, reusable set of declarations
pub struct SharedExamples<C> {
    name: String,
    declare: Rc<Declare<C>>,
}

impl<C> SharedExamples<C> {
    pub fn new<F>(name: impl Into<String>, declare: F) -> Self
    where
        F: Fn(&mut GroupBuilder<'_, C>) + 'static,
    {
        Self {
            name: name.into(),
            declare: Rc::new(declare),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clones share a key; distinct bodies never do, whatever their names
    fn key(&self) -> *const () {
        Rc::as_ptr(&self.declare) as *const ()
    }
}

impl<C> Clone for SharedExamples<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            declare: Rc::clone(&self.declare),
        }
    }
}

impl<C> fmt::Debug for SharedExamples<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedExamples")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
