//! Longest-match tokenization over a declarative rule table.
//!
//! The tokenizer advances lazily: each call to [`Tokenizer::next_token`]
//! evaluates every rule against the remaining text and emits the longest
//! match, breaking length ties in favor of the rule declared earliest.
//! Unmatched input is fatal; there is no lexical backtracking.

use std::fmt;
use std::hash::Hash;

use crate::error::ScanError;
use crate::location::Location;
use crate::rule::LexRule;
use crate::source::{SourceId, TokenSource};
use crate::token::Token;

/// Tokenizer over a source string and a rule table.
pub struct Tokenizer<'src, K, V> {
    /// The rule table; order is the length tie-break.
    rules: Vec<LexRule<K, V>>,
    /// Remaining unconsumed text.
    rest: &'src str,
    /// Location of the first unconsumed character.
    location: Location,
    /// Identity of this input.
    id: SourceId,
    /// Set after a scan failure; the tokenizer is fused from then on.
    failed: bool,
}

impl<'src, K: Copy, V> Tokenizer<'src, K, V> {
    /// Creates a tokenizer over `source` with the given rule table.
    ///
    /// A fresh [`SourceId`] is minted for every tokenizer, so marks taken
    /// over different inputs can never be confused.
    #[must_use]
    pub fn new(source: &'src str, rules: Vec<LexRule<K, V>>) -> Self {
        Self {
            rules,
            rest: source,
            location: Location::at_start(),
            id: SourceId::next(),
            failed: false,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    /// Returns a [`ScanError`] if no rule matches the remaining text. The
    /// error is yielded once; afterwards the tokenizer acts exhausted.
    pub fn scan_token(&mut self) -> Option<Result<Token<K, V>, ScanError>> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        let mut best: Option<(usize, &LexRule<K, V>)> = None;
        for rule in &self.rules {
            if let Some(len) = rule.pattern.match_len(self.rest) {
                // Strictly-greater keeps the earliest rule on equal lengths.
                if best.is_none_or(|(best_len, _)| len > best_len) {
                    best = Some((len, rule));
                }
            }
        }

        let Some((len, rule)) = best else {
            self.failed = true;
            return Some(Err(ScanError::new(self.rest, self.location)));
        };

        let text = &self.rest[..len];
        let token = Token::new(
            rule.kind,
            rule.mapper.as_ref().map(|mapper| mapper(text)),
            text.to_string(),
            self.location,
        );
        self.location.advance(text);
        self.rest = &self.rest[len..];
        Some(Ok(token))
    }

    /// Tokenizes the whole input eagerly.
    ///
    /// # Errors
    /// Returns the first [`ScanError`], if any.
    pub fn tokenize_all(mut self) -> Result<Vec<Token<K, V>>, ScanError> {
        let mut tokens = Vec::new();
        while let Some(result) = self.scan_token() {
            tokens.push(result?);
        }
        Ok(tokens)
    }
}

impl<K, V> Iterator for Tokenizer<'_, K, V>
where
    K: Copy + Eq + Hash + fmt::Debug + fmt::Display,
    V: Clone + PartialEq + fmt::Debug,
{
    type Item = Result<Token<K, V>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_token()
    }
}

impl<K, V> TokenSource for Tokenizer<'_, K, V>
where
    K: Copy + Eq + Hash + fmt::Debug + fmt::Display,
    V: Clone + PartialEq + fmt::Debug,
{
    type Kind = K;
    type Value = V;

    fn source_id(&self) -> SourceId {
        self.id
    }

    fn next_token(&mut self) -> Option<Result<Token<K, V>, ScanError>> {
        self.scan_token()
    }
}
