// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named root of one example-group tree.

use crate::error::BuildError;
use crate::group::builder::BuildState;
use crate::group::{GroupBuilder, GroupTree};
use crate::reporter::Reporter;
use std::fmt;

/// A named specification: the unit registered for execution.
///
/// The fixture context `C` is created by the caller (or by `C::default()`
/// in [`Specification::run`]) and threaded through every hook and example
/// of one run.
pub struct Specification<C> {
    tree: GroupTree<C>,
}

impl<C> Specification<C> {
    /// Declare a specification.
    ///
    /// `declare` populates the root group. Any composition error stops the
    /// specification from being built.
    pub fn build<F>(name: impl Into<String>, declare: F) -> Result<Self, BuildError>
    where
        F: FnOnce(&mut GroupBuilder<'_, C>),
    {
        let mut tree = GroupTree::new(name);
        let mut state = BuildState::default();
        let root = tree.root();
        declare(&mut GroupBuilder::new(&mut tree, &mut state, root));
        state.finish()?;
        Ok(Self { tree })
    }

    /// Wrap a tree assembled through the handle-based [`GroupTree`] API
    pub fn from_tree(tree: GroupTree<C>) -> Self {
        Self { tree }
    }

    pub fn name(&self) -> &str {
        self.tree
            .group(self.tree.root())
            .map(|root| root.description())
            .unwrap_or_default()
    }

    pub fn tree(&self) -> &GroupTree<C> {
        &self.tree
    }

    pub fn example_count(&self) -> usize {
        self.tree.example_count()
    }

    /// Example descriptions in execution order
    pub fn descriptions(&self) -> Vec<String> {
        self.tree.descriptions()
    }

    /// Run against an explicit fixture context
    pub fn run_with(&self, context: &mut C, reporter: &mut dyn Reporter) {
        reporter.begin_specification(self.name());
        self.tree.run(context, reporter);
    }
}

impl<C: Default> Specification<C> {
    /// Run with a fresh default fixture context
    pub fn run(&self, reporter: &mut dyn Reporter) {
        let mut context = C::default();
        self.run_with(&mut context, reporter);
    }
}

impl<C> fmt::Debug for Specification<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("name", &self.name())
            .field("tree", &self.tree)
            .finish()
    }
}

#[cfg(test)]
#[path = "specification_tests.rs"]
mod tests;
