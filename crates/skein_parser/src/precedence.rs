//! Precedence climbing over an ordered table of rule levels.
//!
//! A [`Precedented`] table flattens a precedence hierarchy into one rule:
//! instead of level 0 delegating to level 1 delegating to level 2, every
//! alternative of every level at or tighter than the context's entry level
//! is tried directly, each under a context pinned to its own level. The
//! level index doubles as the cache discriminator, so a memoized rule
//! invoked at two levels never replays the wrong parse.
//!
//! Associativity is encoded in the operand levels an alternative asks for:
//! a left-associative binary alternative parses its left operand at its own
//! level (where left recursion resolves it) and its right operand one level
//! tighter; a right-associative one does the reverse.

use skein_lexer::TokenSource;

use crate::combinators::attempt;
use crate::context::Context;
use crate::error::{Failure, ParseError, Parsed};
use crate::stream::TokenStream;

/// One alternative within a precedence level, closed over a grammar value.
pub type LevelRule<G, S, T> = Box<
    dyn Fn(
        &G,
        &mut TokenStream<S>,
        &Context,
    ) -> Parsed<T, <S as TokenSource>::Kind, <S as TokenSource>::Value>,
>;

/// An ordered table of precedence levels, loosest first.
pub struct Precedented<G, S: TokenSource, T> {
    levels: Vec<Vec<LevelRule<G, S, T>>>,
}

impl<G, S: TokenSource, T> Precedented<G, S, T> {
    /// Creates a table from its levels, index 0 binding loosest.
    #[must_use]
    pub fn new(levels: Vec<Vec<LevelRule<G, S, T>>>) -> Self {
        Self { levels }
    }

    /// The number of levels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if the table has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Tries every alternative from the context's entry level through the
    /// tightest level, in order; the first success wins. Each alternative
    /// runs under a context pinned to its own level, which is what its
    /// operand sub-parses and cache lookups key on.
    ///
    /// # Errors
    /// If every alternative fails recoverably, a flattened
    /// [`ParseError::Alternatives`] over all their failures; an entry level
    /// past the last level fails the same way with no causes. A fatal
    /// failure propagates immediately.
    pub fn apply(
        &self,
        grammar: &G,
        stream: &mut TokenStream<S>,
        ctx: &Context,
    ) -> Parsed<T, S::Kind, S::Value> {
        let mut causes = Vec::new();
        for (index, level) in self.levels.iter().enumerate().skip(ctx.precedence()) {
            let level_ctx = ctx.with_precedence(index);
            for alternative in level {
                match attempt(stream, &level_ctx, |s, c| alternative(grammar, s, c)) {
                    Ok(value) => return Ok(value),
                    Err(Failure::Syntax(error)) => causes.push(error),
                    Err(fatal) => return Err(fatal),
                }
            }
        }
        Err(ParseError::alternatives(causes).into())
    }
}
