// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Raw argument classification.
//!
//! Splitting a token into its kind, name and inline value is the only
//! lexical work the parser does; everything downstream operates on
//! [Token] values.

use crate::error::{Error, Result};

/// The three kinds of command-line argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgKind {
    /// A bare token, consumed by left-to-right position.
    Positional,
    /// A single-dash keyword argument (`-x`).
    Short,
    /// A double-dash keyword argument (`--name`).
    Long,
}

/// A classified command-line token.
///
/// Keyword tokens carry their name with the dash prefix stripped, plus
/// any inline value found after the first `=`. A positional token is its
/// own value and has no name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A bare token.
    Positional {
        /// The whole token.
        value: String,
    },
    /// A single-dash keyword argument.
    Short {
        /// Name with the leading dash stripped (may span several
        /// clustered letters).
        name: String,
        /// Inline value following `=`, if any.
        value: Option<String>,
    },
    /// A double-dash keyword argument.
    Long {
        /// Name with the leading dashes stripped.
        name: String,
        /// Inline value following `=`, if any.
        value: Option<String>,
    },
}

impl Token {
    /// The kind of this token.
    pub fn kind(&self) -> ArgKind {
        match self {
            Token::Positional { .. } => ArgKind::Positional,
            Token::Short { .. } => ArgKind::Short,
            Token::Long { .. } => ArgKind::Long,
        }
    }
}

/// Classify a raw command-line token.
///
/// # Errors
///
/// Tokens starting with three or more dashes fail with
/// [Error::MalformedArg]; every other input classifies successfully.
pub fn classify(arg: &str) -> Result<Token> {
    if arg.starts_with("---") {
        return Err(Error::MalformedArg(arg.into()));
    }

    if let Some(rest) = arg.strip_prefix("--") {
        let (name, value) = split_inline(rest);
        Ok(Token::Long { name, value })
    } else if let Some(rest) = arg.strip_prefix('-') {
        let (name, value) = split_inline(rest);
        Ok(Token::Short { name, value })
    } else {
        Ok(Token::Positional { value: arg.into() })
    }
}

/// Split a registration key into its name and kind.
///
/// Unlike [classify], keys are never split at `=`: the whole dashless
/// remainder is the name.
pub(crate) fn key_name(key: &str) -> Result<(String, ArgKind)> {
    if key.starts_with("---") {
        Err(Error::MalformedArg(key.into()))
    } else if let Some(rest) = key.strip_prefix("--") {
        Ok((rest.into(), ArgKind::Long))
    } else if let Some(rest) = key.strip_prefix('-') {
        Ok((rest.into(), ArgKind::Short))
    } else {
        Ok((key.into(), ArgKind::Positional))
    }
}

fn split_inline(rest: &str) -> (String, Option<String>) {
    match rest.split_once('=') {
        Some((name, value)) => (name.into(), Some(value.into())),
        None => (rest.into(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_kinds() {
        #[derive(Debug)]
        struct TestData<'a> {
            arg: &'a str,
            kind: ArgKind,
        }

        let tests = &[
            TestData {
                arg: "foo",
                kind: ArgKind::Positional,
            },
            TestData {
                arg: "",
                kind: ArgKind::Positional,
            },
            TestData {
                arg: "foo=bar",
                kind: ArgKind::Positional,
            },
            TestData {
                arg: "-f",
                kind: ArgKind::Short,
            },
            TestData {
                arg: "-",
                kind: ArgKind::Short,
            },
            TestData {
                arg: "--foo",
                kind: ArgKind::Long,
            },
            TestData {
                arg: "--",
                kind: ArgKind::Long,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let token = classify(d.arg).unwrap();
            let msg = format!("test[{}]: {:?}, token: {:?}", i, d, token);

            assert_eq!(token.kind(), d.kind, "{}", msg);
        }
    }

    #[test]
    fn test_classify_parts() {
        #[derive(Debug)]
        struct TestData<'a> {
            arg: &'a str,
            token: Token,
        }

        let tests = &[
            TestData {
                arg: "foo",
                token: Token::Positional {
                    value: "foo".into(),
                },
            },
            TestData {
                // A positional keeps its whole text, '=' included.
                arg: "foo=bar",
                token: Token::Positional {
                    value: "foo=bar".into(),
                },
            },
            TestData {
                arg: "-f",
                token: Token::Short {
                    name: "f".into(),
                    value: None,
                },
            },
            TestData {
                arg: "-f=foo",
                token: Token::Short {
                    name: "f".into(),
                    value: Some("foo".into()),
                },
            },
            TestData {
                arg: "--foo",
                token: Token::Long {
                    name: "foo".into(),
                    value: None,
                },
            },
            TestData {
                arg: "--foo=foo",
                token: Token::Long {
                    name: "foo".into(),
                    value: Some("foo".into()),
                },
            },
            TestData {
                // Only the first '=' splits.
                arg: "--foo=a=b",
                token: Token::Long {
                    name: "foo".into(),
                    value: Some("a=b".into()),
                },
            },
            TestData {
                arg: "--foo=",
                token: Token::Long {
                    name: "foo".into(),
                    value: Some("".into()),
                },
            },
            TestData {
                arg: "-",
                token: Token::Short {
                    name: "".into(),
                    value: None,
                },
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let token = classify(d.arg).unwrap();
            let msg = format!("test[{}]: {:?}, token: {:?}", i, d, token);

            assert_eq!(token, d.token, "{}", msg);
        }
    }

    #[test]
    fn test_classify_rejects_triple_dash() {
        for arg in ["---", "---x", "----", "---foo=bar"] {
            let result = classify(arg);

            assert_eq!(result, Err(Error::MalformedArg(arg.into())), "{}", arg);
        }
    }

    #[test]
    fn test_key_name() {
        #[derive(Debug)]
        struct TestData<'a> {
            key: &'a str,
            name: &'a str,
            kind: ArgKind,
        }

        let tests = &[
            TestData {
                key: "src",
                name: "src",
                kind: ArgKind::Positional,
            },
            TestData {
                key: "-f",
                name: "f",
                kind: ArgKind::Short,
            },
            TestData {
                key: "--foo",
                name: "foo",
                kind: ArgKind::Long,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let (name, kind) = key_name(d.key).unwrap();

            assert_eq!(name, d.name, "{}", msg);
            assert_eq!(kind, d.kind, "{}", msg);
        }

        assert_eq!(
            key_name("---x"),
            Err(Error::MalformedArg("---x".into()))
        );
    }
}
