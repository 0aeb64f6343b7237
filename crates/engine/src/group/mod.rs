// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The example-group tree and its traversal.
//!
//! Groups live in an arena owned by [`GroupTree`] and refer to their parent
//! and children by [`GroupId`]. The tree is appended to while a
//! specification is declared and only read while it runs.
//!
//! Running visits groups depth-first in declaration order: a group's own
//! examples first, then each child group. Every example gets its own hook
//! cycle: setup hooks from the root down to the example's group, the body,
//! then teardown hooks from the example's group back up to the root.

pub mod builder;

pub use builder::{GroupBuilder, SharedExamples};

use crate::error::{BuildError, Outcome};
use crate::example::{Example, ExampleOutcome};
use crate::hook::{Hook, HookPhase};
use crate::reporter::Reporter;
use std::fmt;

/// Handle to a group inside a [`GroupTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named scope owning child groups, examples, and hooks
pub struct ExampleGroup<C> {
    description: String,
    parent: Option<GroupId>,
    children: Vec<GroupId>,
    examples: Vec<Example<C>>,
    setup: Vec<Hook<C>>,
    teardown: Vec<Hook<C>>,
}

impl<C> ExampleGroup<C> {
    fn new(description: String, parent: Option<GroupId>) -> Self {
        Self {
            description,
            parent,
            children: Vec::new(),
            examples: Vec::new(),
            setup: Vec::new(),
            teardown: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Enclosing group; `None` for the root
    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    pub fn examples(&self) -> &[Example<C>] {
        &self.examples
    }

    pub fn hooks(&self, phase: HookPhase) -> &[Hook<C>] {
        match phase {
            HookPhase::Setup => &self.setup,
            HookPhase::Teardown => &self.teardown,
        }
    }
}

/// Arena of example groups rooted at a single group
pub struct GroupTree<C> {
    groups: Vec<ExampleGroup<C>>,
}

impl<C> GroupTree<C> {
    /// Create a tree holding only a root group
    pub fn new(root_description: impl Into<String>) -> Self {
        Self {
            groups: vec![ExampleGroup::new(root_description.into(), None)],
        }
    }

    pub fn root(&self) -> GroupId {
        GroupId(0)
    }

    pub fn group(&self, id: GroupId) -> Option<&ExampleGroup<C>> {
        self.groups.get(id.0)
    }

    fn group_mut(&mut self, id: GroupId) -> Result<&mut ExampleGroup<C>, BuildError> {
        self.groups
            .get_mut(id.0)
            .ok_or(BuildError::UnknownGroup(id))
    }

    /// Append a child group and return its handle
    pub fn add_child_group(
        &mut self,
        parent: GroupId,
        description: impl Into<String>,
    ) -> Result<GroupId, BuildError> {
        self.group_mut(parent)?;
        let id = GroupId(self.groups.len());
        self.groups
            .push(ExampleGroup::new(description.into(), Some(parent)));
        self.group_mut(parent)?.children.push(id);
        Ok(id)
    }

    pub fn add_example<F>(
        &mut self,
        group: GroupId,
        description: impl Into<String>,
        body: F,
    ) -> Result<(), BuildError>
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        self.group_mut(group)?
            .examples
            .push(Example::new(description, body));
        Ok(())
    }

    pub fn add_setup_hook<F>(&mut self, group: GroupId, body: F) -> Result<(), BuildError>
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        self.group_mut(group)?
            .setup
            .push(Hook::new(HookPhase::Setup, body));
        Ok(())
    }

    pub fn add_teardown_hook<F>(&mut self, group: GroupId, body: F) -> Result<(), BuildError>
    where
        F: Fn(&mut C) -> Outcome + 'static,
    {
        self.group_mut(group)?
            .teardown
            .push(Hook::new(HookPhase::Teardown, body));
        Ok(())
    }

    /// Groups from the root down to `id`, inclusive
    pub fn ancestry(&self, id: GroupId) -> Vec<GroupId> {
        let mut chain = Vec::new();
        let mut current = self.group(id).map(|_| id);
        while let Some(group_id) = current {
            chain.push(group_id);
            current = self.group(group_id).and_then(ExampleGroup::parent);
        }
        chain.reverse();
        chain
    }

    /// Number of examples anywhere in the tree
    pub fn example_count(&self) -> usize {
        self.groups.iter().map(|group| group.examples.len()).sum()
    }

    /// Example descriptions in execution order
    pub fn descriptions(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_descriptions(self.root(), &mut out);
        out
    }

    fn collect_descriptions(&self, id: GroupId, out: &mut Vec<String>) {
        let Some(group) = self.group(id) else {
            return;
        };
        out.extend(group.examples.iter().map(|e| e.description().to_string()));
        for child in &group.children {
            self.collect_descriptions(*child, out);
        }
    }

    /// Run every example in the tree, reporting one event per example
    pub fn run(&self, context: &mut C, reporter: &mut dyn Reporter) {
        self.run_group(self.root(), context, reporter);
    }

    fn run_group(&self, id: GroupId, context: &mut C, reporter: &mut dyn Reporter) {
        let Some(group) = self.group(id) else {
            return;
        };

        for example in &group.examples {
            match self.run_example(id, example, context) {
                ExampleOutcome::Passed => reporter.pass(example.description()),
                ExampleOutcome::Failed { message } => {
                    reporter.fail(example.description(), &message)
                }
            }
        }

        for child in &group.children {
            self.run_group(*child, context, reporter);
        }
    }

    /// One hook cycle around one example; the first failure is kept
    fn run_example(&self, id: GroupId, example: &Example<C>, context: &mut C) -> ExampleOutcome {
        let chain: Vec<&ExampleGroup<C>> = self
            .ancestry(id)
            .into_iter()
            .filter_map(|group_id| self.group(group_id))
            .collect();
        let mut outcome = ExampleOutcome::Passed;

        // A failed setup skips the rest of setup and the body
        'setup: for group in &chain {
            for hook in &group.setup {
                outcome.record(hook.invoke(context));
                if !outcome.is_passed() {
                    break 'setup;
                }
            }
        }

        if outcome.is_passed() {
            outcome.record(example.invoke(context));
        }

        for group in chain.iter().rev() {
            for hook in &group.teardown {
                outcome.record(hook.invoke(context));
            }
        }

        outcome
    }
}

impl<C> fmt::Debug for GroupTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupTree")
            .field("groups", &self.groups.len())
            .field("examples", &self.example_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
