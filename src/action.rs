// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Action kinds and registration options.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::parsed::{ParsedArgs, Value};

/// Callback type for [Action::Custom] handlers.
///
/// The callback receives the raw value attached to the triggering token
/// (if any) and the live result accumulator, which it may mutate freely.
///
/// # Notes
///
/// The shared-ownership wrapper lets a short/long key pair alias the
/// same closure instance.
pub type CustomHandler = Rc<RefCell<Box<dyn FnMut(Option<&str>, &mut ParsedArgs)>>>;

/// How many positional values a single value action consumes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arity {
    /// Exactly one value (the default).
    One,
    /// A fixed number of values.
    Exactly(usize),
    /// At least one value; collection stops at the next keyword
    /// argument or at end of input.
    OneOrMore,
    /// Any number of values, including none.
    ZeroOrMore,
}

impl Default for Arity {
    fn default() -> Self {
        Arity::One
    }
}

/// The behaviour bound to a registered key.
#[derive(Clone)]
pub enum Action {
    /// Print the composed help text, then stop the process with success
    /// status.
    Help,
    /// Print the configured version string, then stop the process with
    /// success status.
    Version,
    /// Store one or more values under the destination key.
    Value {
        /// How many values to consume.
        arity: Arity,
    },
    /// Store `true` under the destination key. Repetition is a no-op.
    Flag,
    /// Count occurrences: the destination starts at zero and gains one
    /// per occurrence.
    Count,
    /// Store a fixed value under the destination key; later occurrences
    /// overwrite earlier ones.
    Constant(Value),
    /// Invoke a user-supplied callback with the raw value and the live
    /// accumulator.
    Custom(CustomHandler),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Help => write!(f, "Help"),
            Action::Version => write!(f, "Version"),
            Action::Value { arity } => write!(f, "Value({:?})", arity),
            Action::Flag => write!(f, "Flag"),
            Action::Count => write!(f, "Count"),
            Action::Constant(value) => write!(f, "Constant({:?})", value),
            Action::Custom(handler) => write!(f, "Custom({:p})", Rc::as_ptr(handler)),
        }
    }
}

/// Registration options for one argument: the action to perform, its
/// help text and an optional destination override.
///
/// When no destination is given, dest-bearing actions default to the
/// argument's declared name (the long name for a short/long pair).
#[derive(Debug)]
pub struct Opt {
    pub(crate) action: Action,
    pub(crate) help: String,
    pub(crate) dest: Option<String>,
}

impl Opt {
    /// Create registration options around an explicit [Action].
    pub fn new(action: Action) -> Self {
        Opt {
            action,
            help: String::new(),
            dest: None,
        }
    }

    /// A flag action.
    pub fn flag() -> Self {
        Opt::new(Action::Flag)
    }

    /// A value action consuming exactly one value.
    pub fn value() -> Self {
        Opt::new(Action::Value { arity: Arity::One })
    }

    /// A value action with an explicit arity.
    pub fn values(arity: Arity) -> Self {
        Opt::new(Action::Value { arity })
    }

    /// A count action.
    pub fn count() -> Self {
        Opt::new(Action::Count)
    }

    /// A constant action storing the given value on every occurrence.
    pub fn constant(value: impl Into<Value>) -> Self {
        Opt::new(Action::Constant(value.into()))
    }

    /// A custom action invoking the given callback.
    pub fn custom(handler: impl FnMut(Option<&str>, &mut ParsedArgs) + 'static) -> Self {
        let handler: Box<dyn FnMut(Option<&str>, &mut ParsedArgs)> = Box::new(handler);

        Opt::new(Action::Custom(Rc::new(RefCell::new(handler))))
    }

    /// Specify the help text for the argument.
    pub fn help(self, help: &str) -> Self {
        Opt {
            help: help.into(),
            ..self
        }
    }

    /// Override the destination key the resolved value is written to.
    pub fn dest(self, dest: &str) -> Self {
        Opt {
            dest: Some(dest.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_default() {
        assert_eq!(Arity::default(), Arity::One);
    }

    #[test]
    fn test_opt_builders() {
        let opt = Opt::flag();
        assert!(matches!(opt.action, Action::Flag));
        assert_eq!(opt.help, "");
        assert_eq!(opt.dest, None);

        let opt = Opt::value().help("some help text").dest("other");
        assert!(matches!(
            opt.action,
            Action::Value { arity: Arity::One }
        ));
        assert_eq!(opt.help, "some help text");
        assert_eq!(opt.dest, Some("other".into()));

        let opt = Opt::values(Arity::Exactly(3));
        assert!(matches!(
            opt.action,
            Action::Value {
                arity: Arity::Exactly(3)
            }
        ));

        let opt = Opt::constant("fixed");
        assert!(matches!(
            opt.action,
            Action::Constant(Value::Str(ref s)) if s == "fixed"
        ));

        let opt = Opt::count();
        assert!(matches!(opt.action, Action::Count));
    }

    #[test]
    fn test_custom_action_aliases_one_closure() {
        let opt = Opt::custom(|_value, _result| {});

        let first = opt.action.clone();
        let second = opt.action.clone();

        match (&first, &second) {
            (Action::Custom(a), Action::Custom(b)) => {
                assert!(Rc::ptr_eq(a, b));
            }
            _ => panic!("expected custom actions"),
        }
    }

    #[test]
    fn test_action_debug() {
        assert_eq!(format!("{:?}", Action::Flag), "Flag");
        assert_eq!(
            format!("{:?}", Action::Value { arity: Arity::OneOrMore }),
            "Value(OneOrMore)"
        );

        let custom = Opt::custom(|_, _| {}).action;
        assert!(format!("{:?}", custom).starts_with("Custom(0x"));
    }
}
