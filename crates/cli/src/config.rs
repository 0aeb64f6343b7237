// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration loaded from a TOML file.
//!
//! ```toml
//! specs = ["RomanNumerals"]
//! color = "never"
//! capture = "target/outcomes.jsonl"
//! ```
//!
//! Command-line flags override file values; see [`RunConfig::merge_cli`].

use crate::cli::Cli;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// When to colour the report stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal && !no_color,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Settings for one invocation of the runner
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Specifications to run; empty runs all of them
    #[serde(default)]
    pub specs: Vec<String>,

    #[serde(default)]
    pub color: ColorChoice,

    /// JSONL file receiving one record per example
    #[serde(default)]
    pub capture: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Specification names selected more than once, in first-repeat order
    pub fn repeated_specs(&self) -> Vec<&str> {
        let mut repeated: Vec<&str> = Vec::new();
        for (i, name) in self.specs.iter().enumerate() {
            if self.specs[..i].contains(name) && !repeated.contains(&name.as_str()) {
                repeated.push(name);
            }
        }
        repeated
    }

    /// Overlay command-line values on top of file values
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if !cli.specs.is_empty() {
            self.specs = cli.specs.clone();
        }
        if let Some(color) = cli.color {
            self.color = color;
        }
        if let Some(capture) = &cli.capture {
            self.capture = Some(capture.clone());
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
