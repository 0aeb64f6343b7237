// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the bundled suite according to the command line and config file.

use std::io::Write;
use std::panic::{self, PanicHookInfo};
use std::path::PathBuf;

use nestspec::{BuildError, Reporter, StreamReporter, Suite, SuiteError};
use nestspec_capture::OutcomeLog;
use thiserror::Error;

use crate::capture::CapturingReporter;
use crate::cli::Cli;
use crate::config::{ConfigError, RunConfig};
use crate::env;
use crate::specs;

/// Process exit codes
pub mod exit_codes {
    /// Every example passed
    pub const SUCCESS: i32 = 0;
    /// At least one example failed
    pub const FAILURES: i32 = 1;
    /// Configuration, selection, or build problem; nothing ran
    pub const USAGE: i32 = 2;
}

/// Problems that stop a run before any example executes
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build specifications: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Selection(#[from] SuiteError),

    #[error("failed to open capture file {}: {source}", path.display())]
    Capture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Resolved settings for one invocation
pub struct Runner {
    config: RunConfig,
    list: bool,
}

impl Runner {
    /// Load the config file named on the command line (if any) and apply flags
    pub fn from_cli(cli: &Cli) -> Result<Self, RunError> {
        let config = match &cli.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        Ok(Self {
            config: config.merge_cli(cli),
            list: cli.list,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Problems worth reporting that do not stop the run
    pub fn warnings(&self) -> Vec<String> {
        self.config
            .repeated_specs()
            .into_iter()
            .map(|name| format!("specification '{}' selected more than once", name))
            .collect()
    }

    /// Build the bundled specifications and execute (or list) the selection
    pub fn execute<W: Write>(&self, out: W, is_terminal: bool) -> Result<i32, RunError> {
        self.run_suite(specs::suite()?, out, is_terminal)
    }

    /// Execute (or list) the configured selection from `suite`
    pub fn run_suite<W: Write>(
        &self,
        suite: Suite,
        out: W,
        is_terminal: bool,
    ) -> Result<i32, RunError> {
        let suite = suite.select(&self.config.specs)?;
        if self.list {
            return list(&suite, out);
        }

        let color = self.config.color.enabled(is_terminal, env::no_color());
        let stream = StreamReporter::new(out).with_color(color);

        let success = match &self.config.capture {
            Some(path) => {
                let log = OutcomeLog::with_file(path).map_err(|source| RunError::Capture {
                    path: path.clone(),
                    source,
                })?;
                run(&suite, CapturingReporter::new(stream, log))
            }
            None => run(&suite, stream),
        };

        Ok(if success {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURES
        })
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Silences the process panic hook until dropped.
///
/// Panicking examples are already reported as failures in the stream.
pub struct QuietPanics {
    previous: Option<PanicHook>,
}

impl QuietPanics {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

fn run<R: Reporter>(suite: &Suite, mut reporter: R) -> bool {
    suite.run(&mut reporter);
    reporter.is_success()
}

fn list<W: Write>(suite: &Suite, mut out: W) -> Result<i32, RunError> {
    for spec in suite.iter() {
        writeln!(out, "{} ({} examples)", spec.name(), spec.example_count())?;
    }
    out.flush()?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
