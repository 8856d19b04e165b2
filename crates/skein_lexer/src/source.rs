//! Source identity and the token-source boundary trait.

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ScanError;
use crate::filter::Filtered;
use crate::token::Token;

/// Global counter for minting unique source identities.
static SOURCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of one tokenized input.
///
/// Marks taken from different sources are incomparable; the identity is
/// minted by the tokenizer and passed through filters unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

impl SourceId {
    /// Mints a fresh identity, distinct from every other in this process.
    #[must_use]
    pub fn next() -> Self {
        Self(SOURCE_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// A pull-based sequence of tokens tagged with a source identity.
///
/// This is the boundary between the lexical layer and the parser: the
/// tokenizer implements it, filters wrap it, and the parser's token stream
/// consumes it. Yielding `Some(Err(_))` aborts the sequence; implementations
/// are fused after an error.
pub trait TokenSource {
    /// The token-kind type of this source's vocabulary.
    type Kind: Copy + Eq + Hash + fmt::Debug + fmt::Display;
    /// The decoded-value type attached to tokens by rule mappers.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Returns the identity of the originating input.
    fn source_id(&self) -> SourceId;

    /// Pulls the next token, `None` at end of input, or a fatal scan error.
    fn next_token(&mut self) -> Option<Result<Token<Self::Kind, Self::Value>, ScanError>>;

    /// Wraps this source so that tokens of the given kinds are dropped.
    fn filtered(self, ignored: Vec<Self::Kind>) -> Filtered<Self>
    where
        Self: Sized,
    {
        Filtered::new(self, ignored)
    }
}
