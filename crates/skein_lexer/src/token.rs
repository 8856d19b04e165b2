//! Token types produced by the tokenizer.
//!
//! Tokens are generic over the grammar's kind and decoded-value types: the
//! engine imposes no fixed vocabulary.

use std::fmt;

use crate::location::Location;

/// A classified, located lexical unit.
///
/// Tokens are produced once by the tokenizer and never mutated; tree nodes
/// that embed them clone them cheaply.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<K, V> {
    /// The token's kind, as declared by the matching lexical rule.
    pub kind: K,
    /// The decoded value, if the matching rule declared a mapper.
    pub value: Option<V>,
    /// The exact source text this token matched.
    pub text: String,
    /// Source location of the first character of this token.
    pub location: Location,
}

impl<K, V> Token<K, V> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: K, value: Option<V>, text: String, location: Location) -> Self {
        Self {
            kind,
            value,
            text,
            location,
        }
    }

    /// Returns the source text this token matched.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<K: fmt::Display, V> fmt::Display for Token<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.text, self.location)
    }
}
