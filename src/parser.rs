// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! The parser: registration, orchestration and action dispatch.

use std::env;

use crate::action::{Action, Arity, Opt};
use crate::console::{Console, StdConsole};
use crate::error::{Error, Result};
use crate::parsed::{ParsedArgs, Value};
use crate::queue::Queue;
use crate::registry::{Binding, Registry};
use crate::token::{self, classify, ArgKind, Token};

/// How parse-time errors are surfaced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorStrategy {
    /// Return the error to the caller.
    #[default]
    Raise,
    /// Print the error and stop the process with failure status.
    Exit,
}

/// Settings used to control the parsers behaviour.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Usage line shown at the top of the help text.
    usage: String,

    /// Optional description paragraph for the help text.
    desc: Option<String>,

    /// Column at which help text starts in a help row.
    padding: usize,

    /// Version string printed by the version action. Setting it
    /// registers `--version`.
    version: Option<String>,

    /// Whether `-h`/`--help` is registered automatically.
    help: bool,

    /// What happens when parsing fails.
    error: ErrorStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            usage: String::new(),
            desc: None,
            padding: 24,
            version: None,
            help: true,
            error: ErrorStrategy::Raise,
        }
    }
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify the usage line for the program.
    pub fn usage(self, usage: &str) -> Self {
        Settings {
            usage: usage.into(),
            ..self
        }
    }

    /// Specify a description paragraph for the program.
    pub fn desc(self, desc: &str) -> Self {
        Settings {
            desc: Some(desc.into()),
            ..self
        }
    }

    /// Specify the column at which help text starts.
    pub fn padding(self, padding: usize) -> Self {
        Settings { padding, ..self }
    }

    /// Specify the version of the program.
    ///
    /// A parser built from these settings registers a `--version`
    /// handler that prints this string.
    pub fn version(self, version: &str) -> Self {
        Settings {
            version: Some(version.into()),
            ..self
        }
    }

    /// Do not register `-h`/`--help` automatically.
    pub fn no_help(self) -> Self {
        Settings {
            help: false,
            ..self
        }
    }

    /// Specify what happens when parsing fails.
    pub fn error_strategy(self, error: ErrorStrategy) -> Self {
        Settings { error, ..self }
    }
}

/// A registration key: one keyword argument key, or a short/long pair
/// sharing a single handler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySpec {
    /// A single key: `-x`, `--name`, or a bare positional name.
    Single(String),
    /// A short key and a long key bound to the same handler.
    Pair(String, String),
}

impl From<&str> for KeySpec {
    fn from(key: &str) -> Self {
        KeySpec::Single(key.into())
    }
}

impl From<String> for KeySpec {
    fn from(key: String) -> Self {
        KeySpec::Single(key)
    }
}

impl From<(&str, &str)> for KeySpec {
    fn from((short, long): (&str, &str)) -> Self {
        KeySpec::Pair(short.into(), long.into())
    }
}

impl From<[&str; 2]> for KeySpec {
    fn from([short, long]: [&str; 2]) -> Self {
        KeySpec::Pair(short.into(), long.into())
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Parser::parse_with_args()]. However, this isn't usually
/// required: just call [Parser::parse()].
pub fn get_args() -> Vec<String> {
    let mut args: Vec<String> = env::args().collect();

    // Remove program name
    let _ = args.remove(0);

    args
}

/// One help-output row for a registered keyword argument.
#[derive(Clone, Debug)]
struct HelpRow {
    short: Option<String>,
    long: String,
    placeholder: String,
    help: String,
}

/// A pending request for the next positional token's value.
///
/// Recorded when an option still owes a value that has not appeared in
/// the token stream yet; resolved by a later positional token, or
/// rejected when a required request outlives the input.
#[derive(Clone, Debug)]
struct Continuation {
    dest: String,
    required: bool,
    rest: Rest,
}

/// What resolving a continuation does, and what gets re-enqueued.
#[derive(Clone, Copy, Debug)]
enum Rest {
    /// Write the value straight to the destination.
    Scalar,
    /// Append to the destination sequence; the count is how many more
    /// required links follow this one.
    Counted(usize),
    /// Append and re-enqueue an optional copy of this request, until a
    /// keyword argument or end of input ends the chain.
    Greedy,
}

/// The command-line parser.
///
/// Register handlers with [handle](Parser::handle), then run a single
/// left-to-right pass over the argument vector with
/// [parse](Parser::parse) or [parse_with_args](Parser::parse_with_args).
///
/// # Notes
///
/// - `-h`/`--help` is registered at construction time unless disabled
///   via [Settings::no_help]; `--version` is registered when
///   [Settings::version] is set.
/// - The parser holds per-instance parse state (the positional cursor
///   and the pending-value queue), reset at the start of each parse;
///   one instance must not be parsed reentrantly.
#[derive(Debug)]
pub struct Parser {
    settings: Settings,
    registry: Registry,
    continuations: Queue<Continuation>,
    help_rows: Vec<HelpRow>,
    cursor: usize,
    console: Box<dyn Console>,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// Create a parser with default [Settings].
    pub fn new() -> Self {
        Parser::with_settings(Settings::default())
    }

    /// Create a parser with the given [Settings].
    pub fn with_settings(settings: Settings) -> Self {
        let mut parser = Parser {
            settings,
            registry: Registry::new(),
            continuations: Queue::new(),
            help_rows: Vec::new(),
            cursor: 0,
            console: Box::new(StdConsole),
        };

        if parser.settings.help {
            parser.register_opt(
                Some("-h"),
                "--help",
                "help",
                Opt::new(Action::Help).help("display this help message, then exit"),
            );
        }

        if parser.settings.version.is_some() {
            parser.register_opt(
                None,
                "--version",
                "version",
                Opt::new(Action::Version).help("display this app's version, then exit"),
            );
        }

        parser
    }

    /// Replace the console the parser prints through and terminates
    /// with.
    ///
    /// The default console uses stdout, stderr and the real process
    /// exit; a test harness can substitute a capturing implementation.
    pub fn console(self, console: Box<dyn Console>) -> Self {
        Parser { console, ..self }
    }

    /// Register one handler.
    ///
    /// # Parameters
    ///
    /// - `key`: a short key (`-x`), a long key (`--name`), a
    ///   `("-x", "--name")` pair, or a bare name denoting a positional
    ///   argument.
    /// - `opt`: the action to perform plus help text and an optional
    ///   destination override; the destination defaults to the declared
    ///   name (the long name for a pair).
    ///
    /// # Notes
    ///
    /// - Re-registering an existing key silently replaces the earlier
    ///   handler.
    /// - Positional keys require a value action. A one-or-more or
    ///   zero-or-more positional must be the last one: later positional
    ///   registrations are accepted but can never be reached.
    ///
    /// # Errors
    ///
    /// Fails with [Error::MalformedArg] for keys starting with three
    /// dashes, and [Error::InvalidKey] for empty names, multi-letter
    /// short keys, mismatched pair forms and non-value positionals.
    pub fn handle(&mut self, key: impl Into<KeySpec>, opt: Opt) -> Result<()> {
        match key.into() {
            KeySpec::Single(key) => {
                let (name, kind) = token::key_name(&key)?;

                if name.is_empty() {
                    return Err(Error::InvalidKey(key));
                }

                match kind {
                    ArgKind::Positional => self.register_posn(&name, opt),
                    ArgKind::Short => {
                        if name.chars().count() != 1 {
                            return Err(Error::InvalidKey(key));
                        }

                        self.register_opt(None, &key, &name, opt);
                        Ok(())
                    }
                    ArgKind::Long => {
                        self.register_opt(None, &key, &name, opt);
                        Ok(())
                    }
                }
            }
            KeySpec::Pair(short, long) => {
                let (short_name, short_kind) = token::key_name(&short)?;
                let (long_name, long_kind) = token::key_name(&long)?;

                if short_kind != ArgKind::Short
                    || short_name.chars().count() != 1
                    || long_kind != ArgKind::Long
                    || long_name.is_empty()
                {
                    return Err(Error::InvalidKey(format!("{}, {}", short, long)));
                }

                self.register_opt(Some(&short), &long, &long_name, opt);
                Ok(())
            }
        }
    }

    /// Parse the process's own command line (without the program name).
    pub fn parse(&mut self) -> Result<ParsedArgs> {
        let cli_args = get_args();

        self.parse_with_args(cli_args)
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: Vector of string arguments. Specify your own,
    ///   or call [get_args()].
    ///
    /// # Notes
    ///
    /// - Help and version actions print through the console and stop
    ///   the process instead of returning.
    /// - Under [ErrorStrategy::Exit], parse errors also leave through
    ///   the console; under [ErrorStrategy::Raise] (the default) they
    ///   are returned.
    pub fn parse_with_args(&mut self, cli_args: Vec<String>) -> Result<ParsedArgs> {
        self.cursor = 0;
        self.continuations = Queue::new();

        let mut result = ParsedArgs::new();

        for cli_arg in &cli_args {
            match classify(cli_arg) {
                Ok(Token::Positional { value }) => {
                    self.parse_posn(cli_arg, &value, &mut result)?;
                }
                Ok(Token::Short { name, value }) => {
                    self.parse_short(cli_arg, &name, value.as_deref(), &mut result)?;
                }
                Ok(Token::Long { name, value }) => {
                    self.parse_long(cli_arg, &name, value.as_deref(), &mut result)?;
                }
                Err(error) => return Err(self.emit(error)),
            }
        }

        // Nothing may stay owed once the input ends.
        self.reject_remaining()?;

        Ok(result)
    }

    /// Handle one positional token.
    ///
    /// A pending value request always wins over the positional slots.
    fn parse_posn(&mut self, arg: &str, value: &str, result: &mut ParsedArgs) -> Result<()> {
        if let Some(continuation) = self.continuations.pop_front() {
            self.resolve(continuation, value, result);
            return Ok(());
        }

        match self.registry.slot(self.cursor) {
            Some(binding) => {
                self.dispatch(binding, Some(value), result);
                Ok(())
            }
            None if self.cursor == 0 => Err(self.emit(Error::NoPosnHandlers(arg.into()))),
            None => Err(self.emit(Error::ExtraPosnArg(arg.into()))),
        }
    }

    /// Handle one short token, treating its name as a cluster of
    /// single-letter keys.
    ///
    /// Every letter but the last dispatches with an absent value; the
    /// last letter carries any inline value.
    fn parse_short(
        &mut self,
        arg: &str,
        name: &str,
        value: Option<&str>,
        result: &mut ParsedArgs,
    ) -> Result<()> {
        if !self.continuations.is_empty() {
            return self.reject_pending(arg);
        }

        let letters: Vec<char> = name.chars().collect();

        for (i, letter) in letters.iter().enumerate() {
            let key = format!("-{}", letter);
            let letter_value = if i == letters.len() - 1 { value } else { None };

            match self.registry.opt(&key) {
                Some(binding) => self.dispatch(binding, letter_value, result),
                None => return Err(self.emit(Error::UnknownArg(arg.into()))),
            }
        }

        Ok(())
    }

    /// Handle one long token.
    fn parse_long(
        &mut self,
        arg: &str,
        name: &str,
        value: Option<&str>,
        result: &mut ParsedArgs,
    ) -> Result<()> {
        if !self.continuations.is_empty() {
            return self.reject_pending(arg);
        }

        let key = format!("--{}", name);

        match self.registry.opt(&key) {
            Some(binding) => {
                self.dispatch(binding, value, result);
                Ok(())
            }
            None => Err(self.emit(Error::UnknownArg(arg.into()))),
        }
    }

    /// Execute one action against the accumulator and the pending-value
    /// queue.
    fn dispatch(&mut self, binding: Binding, value: Option<&str>, result: &mut ParsedArgs) {
        let Binding { action, dest } = binding;

        match action {
            Action::Help => {
                let text = self.compose_help();
                self.console.print(&text);
                self.console.exit(0)
            }
            Action::Version => {
                let version = self.settings.version.clone().unwrap_or_default();
                self.console.print(&version);
                self.console.exit(0)
            }
            Action::Value { arity } => self.dispatch_value(arity, dest, value, result),
            Action::Flag => result.insert(dest, Value::Bool(true)),
            Action::Count => result.bump(&dest),
            Action::Constant(constant) => result.insert(dest, constant),
            Action::Custom(handler) => {
                let mut run = handler.borrow_mut();
                (*run)(value, result);
            }
        }
    }

    /// The value-action half of dispatch: resolve inline values
    /// immediately, queue requests for everything still owed.
    fn dispatch_value(
        &mut self,
        arity: Arity,
        dest: String,
        value: Option<&str>,
        result: &mut ParsedArgs,
    ) {
        match arity {
            Arity::One => {
                match value {
                    Some(value) => result.insert(dest, Value::Str(value.into())),
                    None => self.continuations.push(Continuation {
                        dest,
                        required: true,
                        rest: Rest::Scalar,
                    }),
                }

                // The slot is claimed even when its value arrives later.
                self.cursor += 1;
            }
            Arity::Exactly(count) => {
                // Any inline value is discarded; the whole group arrives
                // through the continuation chain.
                if count > 0 {
                    self.continuations.push(Continuation {
                        dest,
                        required: true,
                        rest: Rest::Counted(count - 1),
                    });
                }

                self.cursor += 1;
            }
            Arity::OneOrMore => match value {
                Some(value) => {
                    result.append(&dest, value);
                    self.continuations.push(Continuation {
                        dest,
                        required: false,
                        rest: Rest::Greedy,
                    });
                }
                None => self.continuations.push(Continuation {
                    dest,
                    required: true,
                    rest: Rest::Greedy,
                }),
            },
            Arity::ZeroOrMore => {
                if let Some(value) = value {
                    result.append(&dest, value);
                }

                self.continuations.push(Continuation {
                    dest,
                    required: false,
                    rest: Rest::Greedy,
                });
            }
        }
    }

    /// Feed a positional token's text to a popped continuation and
    /// re-enqueue whatever the chain still owes.
    fn resolve(&mut self, continuation: Continuation, value: &str, result: &mut ParsedArgs) {
        match continuation.rest {
            Rest::Scalar => result.insert(continuation.dest, Value::Str(value.into())),
            Rest::Counted(remaining) => {
                result.append(&continuation.dest, value);

                if remaining > 0 {
                    self.continuations.push(Continuation {
                        dest: continuation.dest,
                        required: true,
                        rest: Rest::Counted(remaining - 1),
                    });
                }
            }
            Rest::Greedy => {
                result.append(&continuation.dest, value);

                self.continuations.push(Continuation {
                    dest: continuation.dest,
                    required: false,
                    rest: Rest::Greedy,
                });
            }
        }
    }

    /// Drain the queue because a keyword argument arrived: optional
    /// requests resolve to absent, a required one rejects.
    ///
    /// The keyword token itself is consumed by the drain.
    fn reject_pending(&mut self, arg: &str) -> Result<()> {
        for continuation in self.continuations.drain_all() {
            if continuation.required {
                return Err(self.emit(Error::InterruptedArgValue(arg.into())));
            }
        }

        Ok(())
    }

    /// Drain the queue at end of input: optional requests resolve to
    /// absent, a required one rejects.
    fn reject_remaining(&mut self) -> Result<()> {
        for continuation in self.continuations.drain_all() {
            if continuation.required {
                return Err(self.emit(Error::MissingArgValue));
            }
        }

        Ok(())
    }

    /// The single error-emission point: raise or print-and-exit per the
    /// configured strategy.
    fn emit(&mut self, error: Error) -> Error {
        match self.settings.error {
            ErrorStrategy::Raise => error,
            ErrorStrategy::Exit => {
                self.console.error(&error.to_string());
                self.console.exit(1)
            }
        }
    }

    /// Compose the help text: usage line, optional description, then one
    /// row per registered keyword argument in registration order.
    fn compose_help(&self) -> String {
        let mut lines = Vec::<String>::new();

        lines.push(format!("usage: {}\n", self.settings.usage));

        if let Some(desc) = &self.settings.desc {
            lines.push(format!("{}\n", desc));
        }

        lines.push("optional arguments:".into());

        for row in &self.help_rows {
            lines.push(self.format_help_row(row));
        }

        lines.join("\n")
    }

    fn format_help_row(&self, row: &HelpRow) -> String {
        let lead = match &row.short {
            Some(short) => format!("  {}, {} {}", short, row.long, row.placeholder),
            None => format!("      {} {}", row.long, row.placeholder),
        };

        format!("{:<width$}{}", lead, row.help, width = self.settings.padding)
    }

    fn register_posn(&mut self, name: &str, opt: Opt) -> Result<()> {
        let arity = match &opt.action {
            Action::Value { arity } => *arity,
            _ => return Err(Error::InvalidKey(name.into())),
        };

        let dest = opt.dest.unwrap_or_else(|| name.to_string());
        let variadic = matches!(arity, Arity::OneOrMore | Arity::ZeroOrMore);

        self.registry.insert_posn(
            Binding {
                action: opt.action,
                dest,
            },
            variadic,
        );

        Ok(())
    }

    fn register_opt(&mut self, short: Option<&str>, long: &str, name: &str, opt: Opt) {
        let dest = opt.dest.clone().unwrap_or_else(|| name.to_string());

        self.help_rows.push(HelpRow {
            short: short.map(String::from),
            long: long.into(),
            placeholder: placeholder(&opt.action, &dest),
            help: opt.help,
        });

        let binding = Binding {
            action: opt.action,
            dest,
        };

        match short {
            Some(short) => self.registry.insert_pair(short, long, binding),
            None => self.registry.insert_opt(long, binding),
        }
    }
}

/// The value placeholder shown in a help row: the uppercased
/// destination, decorated for variadic arities.
fn placeholder(action: &Action, dest: &str) -> String {
    match action {
        Action::Value { arity } => match arity {
            Arity::OneOrMore => format!("{}...", dest.to_uppercase()),
            Arity::ZeroOrMore => format!("[{}...]", dest.to_uppercase()),
            _ => dest.to_uppercase(),
        },
        _ => String::new(),
    }
}
