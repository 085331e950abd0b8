//! # Checks
//!
//! A [`Check`] is a pure predicate over a candidate string. It either accepts
//! silently or rejects with an [`InvalidInput`] carrying the message shown to
//! the user. Checks hold their parameters by value and never change after
//! construction, so one check can be evaluated any number of times and wrapped
//! into new checks freely.
//!
//! Checks are normally built with the factories in
//! [`crate::utils::checks`] and handed to
//! [`Terminal::input`](crate::utils::Terminal::input) or
//! [`validate`](crate::utils::validate), which run them in order and stop at
//! the first rejection.
//!
//! ## Example
//! ```rust
//! use termcheck::utils::{Check, Validate, checks};
//!
//! let yes_or_no = checks::is(["y", "n"]);
//! assert!(yes_or_no.validate("Y").is_ok());
//! assert!(yes_or_no.validate("yes").is_err());
//!
//! let pin = [checks::length(4), checks::numeric::<u16>()];
//! assert!(Check::execute("1234", &pin).is_ok());
//! assert!(Check::execute("12a4", &pin).is_err());
//! ```

use crate::utils::numeric::{Number, NumericKind};
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// Message carried by a rejection unless a [`Check::Custom`] replaces it.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input";

/// A rejected candidate. `Display` is exactly the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidInput {
    message: Cow<'static, str>,
}

impl InvalidInput {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvalidInput {
    fn default() -> Self {
        Self::new(INVALID_INPUT_MESSAGE)
    }
}

/// Result of evaluating one check: `Ok(())` accepts, `Err` rejects.
pub type Outcome = Result<(), InvalidInput>;

/// Anything that can judge a candidate string.
pub trait Validate {
    fn validate(&self, input: &str) -> Outcome;
}

/// A regex that only accepts when it spans the whole candidate.
///
/// [`checks::matches_regex`](crate::utils::checks::matches_regex) anchors
/// the pattern it compiles. [`checks::matches`](crate::utils::checks::matches)
/// keeps the caller's regex with all its builder flags and requires the
/// leftmost match to cover the candidate.
#[derive(Debug, Clone)]
pub struct FullMatch {
    regex: Regex,
    anchored: bool,
}

impl FullMatch {
    pub(crate) fn anchored(regex: Regex) -> Self {
        Self {
            regex,
            anchored: true,
        }
    }

    pub(crate) fn unanchored(regex: Regex) -> Self {
        Self {
            regex,
            anchored: false,
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, input: &str) -> bool {
        if self.anchored {
            self.regex.is_match(input)
        } else {
            self.regex
                .find(input)
                .is_some_and(|m| m.start() == 0 && m.end() == input.len())
        }
    }
}

/// Represents a validation rule applied to a candidate.
///
/// - `Is`: the candidate equals one of `options`.
/// - `Pattern`: the candidate fully matches a regex.
/// - `Length`: the candidate has exactly this many characters, none of them
///   `\n` or `\r`.
/// - `Numeric`: the candidate is a literal of the given [`NumericKind`].
/// - `Range`: a `Numeric` literal whose value lies in `[min, max]`.
/// - `Custom`: another check with its rejection message replaced.
/// - `Inverse`: accepts exactly what the inner check rejects.
/// - `Any`: accepts when at least one inner check accepts.
#[derive(Debug, Clone)]
pub enum Check {
    Is {
        options: Vec<String>,
        case_sensitive: bool,
    },
    Pattern(FullMatch),
    Length(usize),
    Numeric(NumericKind),
    Range {
        kind: NumericKind,
        min: Number,
        max: Number,
    },
    Custom {
        check: Box<Check>,
        message: String,
    },
    Inverse(Box<Check>),
    Any(Vec<Check>),
}

impl Check {
    /// Runs `checks` against `input` in order.
    ///
    /// Stops and returns the first rejection. No trimming or other cleanup is
    /// applied to `input`.
    pub fn execute(input: &str, checks: &[Check]) -> Outcome {
        for check in checks {
            check.validate(input)?;
        }
        Ok(())
    }
}

impl Validate for Check {
    fn validate(&self, input: &str) -> Outcome {
        let accepted = match self {
            Check::Is {
                options,
                case_sensitive,
            } => {
                if *case_sensitive {
                    options.iter().any(|option| option == input)
                } else {
                    let folded = input.to_uppercase();
                    options
                        .iter()
                        .any(|option| option.to_uppercase() == folded)
                }
            }
            Check::Pattern(pattern) => pattern.is_match(input),
            Check::Length(n) => {
                !input.contains(['\n', '\r']) && input.chars().count() == *n
            }
            Check::Numeric(kind) => kind.accepts_literal(input),
            Check::Range { kind, min, max } => {
                kind.accepts_literal(input)
                    && kind
                        .parse(input)
                        .is_some_and(|value| value.within(*min, *max))
            }
            Check::Custom { check, message } => {
                return check
                    .validate(input)
                    .map_err(|_| InvalidInput::new(message.clone()));
            }
            Check::Inverse(check) => check.validate(input).is_err(),
            Check::Any(checks) => checks.iter().any(|check| check.validate(input).is_ok()),
        };

        if accepted {
            Ok(())
        } else {
            Err(InvalidInput::default())
        }
    }
}
