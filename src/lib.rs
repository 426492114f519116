// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Small queue-driven crate for parsing command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Actions](#actions)
//! * [Deferred values](#deferred-values)
//! * [Positional arguments](#positional-arguments)
//! * [Errors, help and version](#errors-help-and-version)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate parses a command line from a declarative set of handler
//! registrations. Each registration binds a key (a short flag `-x`,
//! a long flag `--name`, a short/long pair, or a bare positional
//! name) to an [Action], and one left-to-right [parse](Parser::parse)
//! pass accumulates every resolved value into a [ParsedArgs] map keyed
//! by destination.
//!
//! Options may take their value inline (`--foo=value`) or as the next
//! bare token (`--foo value`). The latter is resolved through a FIFO
//! queue of pending value requests, which is also what lets a single
//! option consume a fixed or open-ended run of following tokens.
//!
//! # Quickstart
//!
//! ```rust
//! use cliq::{Opt, Parser, Result};
//!
//! fn main() -> Result<()> {
//!     let mut parser = Parser::new();
//!
//!     // Support "-o FILE" / "--output FILE".
//!     parser.handle(("-o", "--output"), Opt::value().help("write output here"))?;
//!
//!     // Support a repeatable "--verbose".
//!     parser.handle("--verbose", Opt::count().help("increase verbosity"))?;
//!
//!     // Support one positional argument.
//!     parser.handle("src", Opt::value().help("input file"))?;
//!
//!     // Usually this would be `parser.parse()?`, which reads the
//!     // process's own arguments.
//!     let args = parser.parse_with_args(vec![
//!         "input.txt".into(),
//!         "--output=report.txt".into(),
//!         "--verbose".into(),
//!     ])?;
//!
//!     assert_eq!(args.string("src"), Some("input.txt"));
//!     assert_eq!(args.string("output"), Some("report.txt"));
//!     assert_eq!(args.count("verbose"), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Actions
//!
//! Seven action kinds exist; see [Action] for the full story:
//!
//! - `value`: store one value, or several with an explicit [Arity].
//! - `flag`: store `true`; repetition is a no-op.
//! - `count`: store the number of occurrences.
//! - `constant`: store a fixed value; the last occurrence wins.
//! - `custom`: call back into user code with the raw value and the
//!   live accumulator.
//! - `help` and `version`: print and stop the process. `-h`/`--help`
//!   and (when a version string is configured) `--version` are
//!   registered automatically at construction time.
//!
//! Destinations default to the declared name: `--foo` writes to
//! `"foo"`, a `("-f", "--foo")` pair also writes to `"foo"`, and
//! [Opt::dest] overrides the default.
//!
//! # Deferred values
//!
//! When an option wants a value that was not supplied inline, the
//! parser records a pending request and fills it with the next bare
//! token:
//!
//! ```rust
//! # fn main() -> cliq::Result<()> {
//! use cliq::{Arity, Opt, Parser};
//!
//! let mut parser = Parser::new();
//! parser.handle("--foo", Opt::value())?;
//! parser.handle("--files", Opt::values(Arity::OneOrMore))?;
//!
//! let args = parser.parse_with_args(vec!["--foo".into(), "value".into()])?;
//! assert_eq!(args.string("foo"), Some("value"));
//!
//! let args = parser.parse_with_args(vec![
//!     "--files".into(),
//!     "a.txt".into(),
//!     "b.txt".into(),
//! ])?;
//! assert_eq!(args.list("files").map(|files| files.len()), Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! Requests are honored strictly in the order they were made. A
//! required request that is still open when the input ends (or when
//! another keyword argument arrives) fails the parse.
//!
//! # Positional arguments
//!
//! Positional handlers occupy numbered slots in registration order and
//! consume bare tokens left to right. A one-or-more or zero-or-more
//! positional swallows every remaining bare token and must therefore
//! be the last positional registered.
//!
//! Note that pending value requests always win over positional slots:
//! a bare token following `--foo` (where `--foo` takes a value) is that
//! option's value, not a positional argument. A value-taking option
//! also claims a positional slot when dispatched, so place positional
//! arguments before such options on the command line.
//!
//! # Errors, help and version
//!
//! Parse failures produce a descriptive [Error]. By default errors are
//! returned to the caller; with [ErrorStrategy::Exit] the parser
//! prints the message and stops the process with failure status
//! instead. Help and version actions always print and stop the
//! process, regardless of strategy.
//!
//! Both output and process termination go through the [Console]
//! collaborator, so tests can capture everything; see the crate's own
//! test suite for a worked example.
//!
//! To wire `--version` to your real package metadata, resolve the
//! version string from the nearest `Cargo.toml` at startup with
//! [manifest_version].
//!
//! # Limitations
//!
//! - Short-option clusters (`-abc`) dispatch every letter; only the
//!   last letter can carry an inline value, so clustering only makes
//!   sense for non-value-consuming actions.
//! - `--` has no special end-of-options meaning.
//! - Option values are always strings; converting them is the
//!   caller's business.
//! - One parser instance must not be parsed reentrantly or shared
//!   across threads mid-parse.

mod action;
mod console;
mod error;
mod manifest;
mod parsed;
mod parser;
mod queue;
mod registry;
mod token;

pub use action::{Action, Arity, CustomHandler, Opt};
pub use console::{Console, StdConsole};
pub use error::{Error, Result};
pub use manifest::{manifest_version, ManifestError};
pub use parsed::{ParsedArgs, Value};
pub use parser::{get_args, ErrorStrategy, KeySpec, Parser, Settings};
pub use queue::Queue;
pub use token::{classify, ArgKind, Token};
