// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// A handler was registered under a key the parser cannot accept:
    /// a malformed short/long pair, or a positional name bound to a
    /// non-value action.
    #[error("invalid handler key: {0:?}")]
    InvalidKey(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User supplied a token with three or more leading dashes.
    #[error("arguments may not start with ---: {0:?}")]
    MalformedArg(String),

    /// User supplied a short or long option with no matching handler.
    #[error("unrecognized keyword argument encountered: {0:?}")]
    UnknownArg(String),

    /// A positional token arrived but nothing positional was ever
    /// registered.
    #[error("no positional argument handlers were registered: {0:?}")]
    NoPosnHandlers(String),

    /// A positional token arrived after every registered positional slot
    /// had already been filled.
    #[error("encountered extraneous positional argument: {0:?}")]
    ExtraPosnArg(String),

    /// Input ended while an option was still owed a value.
    #[error("expected positional argument; encountered end of arguments list")]
    MissingArgValue,

    /// A keyword argument arrived while an option was still owed a value.
    #[error("expected value argument; encountered keyword argument: {0:?}")]
    InterruptedArgValue(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
