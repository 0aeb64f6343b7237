// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nestspec binary entry point.

use std::io::{self, IsTerminal};

use clap::Parser;

use nestspec_cli::cli::Cli;
use nestspec_cli::output_diagnostic::{print_error, print_warning};
use nestspec_cli::runner::{exit_codes, QuietPanics, Runner};

fn main() {
    let cli = Cli::parse();

    let code = match Runner::from_cli(&cli) {
        Ok(runner) => {
            for warning in runner.warnings() {
                print_warning(warning);
            }
            let stdout = io::stdout();
            let is_terminal = stdout.is_terminal();
            let _quiet = QuietPanics::install();
            runner.execute(stdout.lock(), is_terminal)
        }
        Err(e) => Err(e),
    };

    match code {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::USAGE);
        }
    }
}
