//! Parse failure taxonomy.
//!
//! Failures come in two arms with very different contracts:
//!
//! - [`ParseError`] values are *recoverable*: combinators catch exactly
//!   these and use them to drive backtracking and alternative selection.
//! - [`FatalError`] values are *not*: a lexical failure or an unrestrained
//!   left recursion must escape every combinator untouched, so that no
//!   `choice` can accidentally hide a broken input or a broken grammar.
//!
//! [`Failure`] is the sum of the two and the error type of every rule.
//! All variants have structural equality for deterministic assertions.

use std::fmt;

use skein_lexer::{ScanError, Token};
use thiserror::Error;

/// The result type of every grammar rule.
pub type Parsed<T, K, V> = Result<T, Failure<K, V>>;

/// A recoverable syntactic failure: where and why a parse step failed.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError<K, V> {
    /// The next token's kind was not the expected one.
    TokenMismatch {
        /// The kind the rule required.
        expected: K,
        /// The token actually found.
        actual: Token<K, V>,
    },
    /// Input ran out while a rule still expected something.
    UnexpectedEndOfInput {
        /// The kind the rule required, if it required one in particular.
        expected: Option<K>,
    },
    /// A token remained where the grammar required end of input.
    ExpectedEndOfInput {
        /// The trailing token.
        actual: Token<K, V>,
    },
    /// A left-recursive rule referred to itself before a seed parse exists.
    ///
    /// Recoverable on purpose: sibling alternatives of the recursive one
    /// must still get their chance to produce the seed.
    RecursionGuard {
        /// Name of the left-recursive rule.
        rule: &'static str,
    },
    /// Every alternative of a choice failed; one cause per alternative.
    ///
    /// Always flat: construct through [`ParseError::alternatives`], which
    /// splices nested composites into the parent's cause list.
    Alternatives(Vec<ParseError<K, V>>),
}

impl<K, V> ParseError<K, V> {
    /// Aggregates the failures of a choice's alternatives, flattening any
    /// composite causes so the result never nests.
    #[must_use]
    pub fn alternatives(causes: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(causes.len());
        for cause in causes {
            match cause {
                Self::Alternatives(nested) => flat.extend(nested),
                other => flat.push(other),
            }
        }
        Self::Alternatives(flat)
    }

    /// The individual causes: a composite's list, or the error itself.
    #[must_use]
    pub fn causes(&self) -> &[Self] {
        match self {
            Self::Alternatives(causes) => causes,
            other => std::slice::from_ref(other),
        }
    }

    /// True if every leaf cause is a recursion guard for `rule`.
    ///
    /// This is the defect test for unrestrained left recursion: a seed run
    /// whose failure is guards all the way down had no non-left-recursive
    /// alternative at this position.
    #[must_use]
    pub fn is_only_recursion_guards(&self, rule: &str) -> bool {
        match self {
            Self::RecursionGuard { rule: name } => *name == rule,
            Self::Alternatives(causes) => {
                !causes.is_empty()
                    && causes
                        .iter()
                        .all(|cause| cause.is_only_recursion_guards(rule))
            }
            _ => false,
        }
    }
}

impl<K: fmt::Display, V> fmt::Display for ParseError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenMismatch { expected, actual } => {
                write!(
                    f,
                    "expected {expected}, found {} at {}",
                    actual.kind, actual.location
                )
            }
            Self::UnexpectedEndOfInput {
                expected: Some(kind),
            } => {
                write!(f, "unexpected end of input, expected {kind}")
            }
            Self::UnexpectedEndOfInput { expected: None } => {
                write!(f, "unexpected end of input")
            }
            Self::ExpectedEndOfInput { actual } => {
                write!(
                    f,
                    "expected end of input, found {} at {}",
                    actual.kind, actual.location
                )
            }
            Self::RecursionGuard { rule } => {
                write!(f, "left-recursive reference to '{rule}' before a seed parse exists")
            }
            Self::Alternatives(causes) => {
                write!(f, "no alternative matched ({} failures)", causes.len())
            }
        }
    }
}

impl<K, V> std::error::Error for ParseError<K, V>
where
    K: fmt::Debug + fmt::Display,
    V: fmt::Debug,
{
}

/// A failure no combinator may absorb.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FatalError {
    /// Tokenization failed; lexical errors are not subject to backtracking.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// A left-recursive rule has no non-left-recursive alternative at some
    /// position and could never terminate: a grammar-author bug.
    #[error("unrestrained left recursion in rule '{rule}'")]
    LeftRecursion {
        /// Name of the defective rule.
        rule: &'static str,
    },
}

/// The error type of a rule invocation: recoverable or fatal.
#[derive(Clone, Debug, PartialEq)]
pub enum Failure<K, V> {
    /// Recoverable syntactic failure; drives backtracking.
    Syntax(ParseError<K, V>),
    /// Fatal failure; escapes every combinator.
    Fatal(FatalError),
}

impl<K, V> Failure<K, V> {
    /// True for the fatal arm.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

impl<K: fmt::Display, V> fmt::Display for Failure<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(error) => error.fmt(f),
            Self::Fatal(error) => error.fmt(f),
        }
    }
}

impl<K, V> std::error::Error for Failure<K, V>
where
    K: fmt::Debug + fmt::Display,
    V: fmt::Debug,
{
}

impl<K, V> From<ParseError<K, V>> for Failure<K, V> {
    fn from(error: ParseError<K, V>) -> Self {
        Self::Syntax(error)
    }
}

impl<K, V> From<FatalError> for Failure<K, V> {
    fn from(error: FatalError) -> Self {
        Self::Fatal(error)
    }
}

impl<K, V> From<ScanError> for Failure<K, V> {
    fn from(error: ScanError) -> Self {
        Self::Fatal(FatalError::Scan(error))
    }
}
