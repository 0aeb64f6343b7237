// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior-driven specification engine.
//!
//! A [`Specification`] owns a tree of nested example groups. Groups hold
//! examples ("it ...") and setup/teardown hooks that apply to every example
//! in the group and below. Running a specification walks the tree
//! depth-first in declaration order, gives every example its own hook
//! cycle, isolates failures to the example that caused them, and reports
//! one event per example to a [`Reporter`].
//!
//! ```
//! use nestspec::{expect, Reporter, Specification, TallyReporter};
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: i32,
//! }
//!
//! let spec = Specification::build("Counter", |g| {
//!     g.before_each(|c: &mut Counter| {
//!         c.value = 1;
//!         Ok(())
//!     });
//!     g.it("starts at one", |c| {
//!         expect(c.value).should().equal(1)?;
//!         Ok(())
//!     });
//!     g.it("is never zero", |c| {
//!         expect(c.value).should_not().equal(0)?;
//!         Ok(())
//!     });
//! })
//! .unwrap();
//!
//! let mut reporter = TallyReporter::new();
//! spec.run(&mut reporter);
//! assert_eq!(reporter.tally().passed(), 2);
//! ```

pub mod error;
pub mod example;
pub mod expectation;
pub mod group;
pub mod hook;
pub mod matcher;
pub mod reporter;
pub mod signal;
pub mod specification;
pub mod suite;

pub use error::{AssertionFailure, BuildError, Outcome, SuiteError};
pub use example::{Example, ExampleOutcome};
pub use expectation::{block, expect, Block, Expectation, Subject, Verifier};
pub use group::{ExampleGroup, GroupBuilder, GroupId, GroupTree, SharedExamples};
pub use hook::{Hook, HookPhase};
pub use matcher::{Matcher, Polarity};
pub use reporter::{FailureRecord, Reporter, StreamReporter, Tally, TallyReporter};
pub use specification::Specification;
pub use suite::{Runnable, Suite};
