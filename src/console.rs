// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! The console collaborator.
//!
//! Help text, version strings and fatal parse errors leave the parser
//! through this trait, and so does process termination. Injecting a
//! different implementation lets a test harness capture the output and
//! intercept the exit instead of losing the process.

use std::fmt;
use std::process;

use colored::Colorize;

/// Where parser output goes and how the process stops.
pub trait Console {
    /// Write a line of normal program output.
    fn print(&mut self, text: &str);

    /// Write a line of error output.
    fn error(&mut self, text: &str);

    /// Stop the process with the given status code.
    fn exit(&mut self, code: i32) -> !;
}

impl fmt::Debug for dyn Console {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Console: {:p}", self)
    }
}

/// The real console: stdout, stderr and [process::exit].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, text: &str) {
        eprintln!("{} {}", "error:".red().bold(), text);
    }

    fn exit(&mut self, code: i32) -> ! {
        process::exit(code);
    }
}
