// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of specifications for a driver to run.

use crate::error::SuiteError;
use crate::reporter::Reporter;
use crate::specification::Specification;
use std::fmt;

/// A specification whose fixture type has been erased
pub trait Runnable {
    fn name(&self) -> &str;

    fn example_count(&self) -> usize;

    fn descriptions(&self) -> Vec<String>;

    fn run(&self, reporter: &mut dyn Reporter);
}

impl<C: Default> Runnable for Specification<C> {
    fn name(&self) -> &str {
        Specification::name(self)
    }

    fn example_count(&self) -> usize {
        Specification::example_count(self)
    }

    fn descriptions(&self) -> Vec<String> {
        Specification::descriptions(self)
    }

    fn run(&self, reporter: &mut dyn Reporter) {
        Specification::run(self, reporter);
    }
}

/// Ordered collection of registered specifications
#[derive(Default)]
pub struct Suite {
    specs: Vec<Box<dyn Runnable>>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a specification; registration order is run order
    pub fn register<R: Runnable + 'static>(&mut self, spec: R) -> &mut Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Runnable> {
        self.specs
            .iter()
            .find(|spec| spec.name() == name)
            .map(|spec| spec.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Runnable> {
        self.specs.iter().map(|spec| spec.as_ref())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Keep only the named specifications, in registration order.
    ///
    /// An empty selection keeps everything.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> Result<Suite, SuiteError> {
        if names.is_empty() {
            return Ok(self);
        }
        if let Some(missing) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| self.get(name).is_none())
        {
            return Err(SuiteError::UnknownSpecification(missing.to_string()));
        }

        let specs = self
            .specs
            .into_iter()
            .filter(|spec| names.iter().any(|name| name.as_ref() == spec.name()))
            .collect();
        Ok(Suite { specs })
    }

    /// Run every specification, then summarize once
    pub fn run(&self, reporter: &mut dyn Reporter) {
        for spec in &self.specs {
            spec.run(reporter);
        }
        reporter.summary();
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
