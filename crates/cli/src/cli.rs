// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::env;

/// Run nestspec specifications
#[derive(Parser, Debug, Clone)]
#[command(name = "nestspec", version, about = "Run behavior specifications")]
pub struct Cli {
    /// Run only this specification (can be specified multiple times)
    #[arg(long = "spec", value_name = "NAME")]
    pub specs: Vec<String>,

    /// List specifications and their example counts instead of running
    #[arg(long)]
    pub list: bool,

    /// TOML run configuration
    #[arg(long, value_name = "PATH", env = env::NESTSPEC_CONFIG)]
    pub config: Option<PathBuf>,

    /// Append one JSON line per example to this file
    #[arg(long, value_name = "PATH", env = env::NESTSPEC_CAPTURE)]
    pub capture: Option<PathBuf>,

    /// Colour the report (overrides the config file)
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
