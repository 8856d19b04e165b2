//! Buffered token cursor with mark/reset checkpointing.
//!
//! Tokens are pulled from the underlying source lazily and kept in an
//! append-only buffer as they are first requested; the cursor is a plain
//! index into that buffer. Resetting to a mark only moves the cursor, never
//! discards buffered tokens, which is what makes backtracking O(1) instead
//! of re-lexing.

use std::cmp::Ordering;

use skein_lexer::{ScanError, SourceId, Token, TokenSource};

use crate::error::{FatalError, ParseError, Parsed};

/// Shorthand for the token type of a stream over source `S`.
pub type StreamToken<S> = Token<<S as TokenSource>::Kind, <S as TokenSource>::Value>;

/// An immutable snapshot of a stream's cursor position.
///
/// Marks are comparable only within the same source; comparing marks from
/// different sources yields `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mark {
    position: usize,
    source: SourceId,
}

impl Mark {
    /// The token offset this mark points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The identity of the input this mark belongs to.
    #[must_use]
    pub const fn source(&self) -> SourceId {
        self.source
    }
}

impl PartialOrd for Mark {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.source == other.source).then(|| self.position.cmp(&other.position))
    }
}

/// The position/backtracking handle over a token source.
pub struct TokenStream<S: TokenSource> {
    source: S,
    buffer: Vec<StreamToken<S>>,
    cursor: usize,
    id: SourceId,
    /// A scan failure met while buffering, surfaced when the cursor reaches it.
    pending: Option<ScanError>,
    exhausted: bool,
}

impl<S: TokenSource> TokenStream<S> {
    /// Creates a stream pulling from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        let id = source.source_id();
        Self {
            source,
            buffer: Vec::new(),
            cursor: 0,
            id,
            pending: None,
            exhausted: false,
        }
    }

    /// The identity of the underlying input.
    #[must_use]
    pub const fn source_id(&self) -> SourceId {
        self.id
    }

    fn lookahead(&mut self) -> Result<Option<&StreamToken<S>>, FatalError> {
        while self.cursor >= self.buffer.len() && !self.exhausted {
            match self.source.next_token() {
                Some(Ok(token)) => self.buffer.push(token),
                Some(Err(error)) => {
                    self.pending = Some(error);
                    self.exhausted = true;
                }
                None => self.exhausted = true,
            }
        }
        if self.cursor < self.buffer.len() {
            return Ok(Some(&self.buffer[self.cursor]));
        }
        match &self.pending {
            Some(error) => Err(FatalError::Scan(error.clone())),
            None => Ok(None),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if exhausted; fatal on a scan failure.
    pub fn peek(&mut self) -> Parsed<StreamToken<S>, S::Kind, S::Value> {
        match self.lookahead()? {
            Some(token) => Ok(token.clone()),
            None => Err(ParseError::UnexpectedEndOfInput { expected: None }.into()),
        }
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if exhausted; fatal on a scan failure.
    pub fn consume(&mut self) -> Parsed<StreamToken<S>, S::Kind, S::Value> {
        let token = self.peek()?;
        self.cursor += 1;
        Ok(token)
    }

    /// Consumes and returns the next token, which must have the given kind.
    ///
    /// # Errors
    /// `TokenMismatch` on a kind difference, `UnexpectedEndOfInput` if
    /// exhausted; fatal on a scan failure.
    pub fn expect(&mut self, kind: S::Kind) -> Parsed<StreamToken<S>, S::Kind, S::Value> {
        match self.lookahead()? {
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: Some(kind),
            }
            .into()),
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::TokenMismatch {
                expected: kind,
                actual: token.clone(),
            }
            .into()),
        }
    }

    /// True if no token remains.
    ///
    /// # Errors
    /// Fatal on a scan failure at the current position.
    pub fn at_end(&mut self) -> Result<bool, FatalError> {
        Ok(self.lookahead()?.is_none())
    }

    /// Requires end of input.
    ///
    /// # Errors
    /// `ExpectedEndOfInput` if a token remains; fatal on a scan failure.
    pub fn consume_end(&mut self) -> Parsed<(), S::Kind, S::Value> {
        match self.lookahead()? {
            None => Ok(()),
            Some(token) => Err(ParseError::ExpectedEndOfInput {
                actual: token.clone(),
            }
            .into()),
        }
    }

    /// Snapshots the current position.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark {
            position: self.cursor,
            source: self.id,
        }
    }

    /// Moves the cursor back to a previously visited position.
    ///
    /// # Panics
    /// Panics if `mark` was minted by a different stream; marks are only
    /// meaningful within the input that produced them.
    pub fn reset(&mut self, mark: Mark) {
        assert_eq!(
            mark.source, self.id,
            "mark from a different token stream"
        );
        self.cursor = mark.position;
    }
}
