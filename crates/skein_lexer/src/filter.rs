//! Token filtering.
//!
//! Grammars usually declare whitespace and comments as token kinds so the
//! tokenizer stays total, then drop them before parsing. [`Filtered`] is the
//! adapter that does the dropping; the source identity passes through
//! unchanged and nothing is buffered.

use crate::error::ScanError;
use crate::source::{SourceId, TokenSource};
use crate::token::Token;

/// A token source with tokens of designated kinds removed.
pub struct Filtered<S: TokenSource> {
    inner: S,
    ignored: Vec<S::Kind>,
}

impl<S: TokenSource> Filtered<S> {
    /// Wraps `inner`, dropping tokens whose kind appears in `ignored`.
    #[must_use]
    pub fn new(inner: S, ignored: Vec<S::Kind>) -> Self {
        Self { inner, ignored }
    }
}

impl<S: TokenSource> TokenSource for Filtered<S> {
    type Kind = S::Kind;
    type Value = S::Value;

    fn source_id(&self) -> SourceId {
        self.inner.source_id()
    }

    fn next_token(&mut self) -> Option<Result<Token<S::Kind, S::Value>, ScanError>> {
        loop {
            match self.inner.next_token()? {
                Ok(token) if self.ignored.contains(&token.kind) => {}
                other => return Some(other),
            }
        }
    }
}
