//! Per-rule packrat memoization.
//!
//! A [`Cached`] cell wraps one rule so that repeated invocation at the same
//! position replays the previously computed outcome instead of re-running
//! the rule body. Cells are local to one parse run: a grammar value owns one
//! cell per memoized rule and is not shared across inputs.

use std::cell::RefCell;
use std::collections::HashMap;

use skein_lexer::TokenSource;

use crate::context::Context;
use crate::error::{Failure, ParseError, Parsed};
use crate::stream::{Mark, TokenStream};

/// A memoized outcome: the parse succeeded to `end`, or failed recoverably.
#[derive(Clone, Debug, PartialEq)]
enum CacheEntry<T, K, V> {
    Success { node: T, end: Mark },
    Failed { error: ParseError<K, V> },
}

/// A packrat cache cell for one rule.
///
/// The key is `(start mark, precedence level)`: the precedence component is
/// the context-supplied discriminator that keeps two parses at the same
/// position but different levels from colliding.
#[derive(Debug)]
pub struct Cached<T, K, V> {
    entries: RefCell<HashMap<(Mark, usize), CacheEntry<T, K, V>>>,
}

impl<T, K, V> Default for Cached<T, K, V> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T, K, V> Cached<T, K, V>
where
    T: Clone,
    K: Clone,
    V: Clone,
{
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Runs `rule` through the cache.
    ///
    /// A cached success replays by resetting the stream to the stored end
    /// mark and cloning the stored node, with no re-execution of the rule
    /// body; a cached failure replays the stored error. On a miss the rule
    /// runs and its outcome is recorded — except a fatal failure, which is
    /// a bug signal rather than a parse outcome and is never cached.
    ///
    /// When the context forces re-evaluation at the current mark the cache
    /// is bypassed entirely, lookup and store both: a forced outcome is a
    /// function of surrounding parse state (live left-recursion frames),
    /// not of the key, and recording it would poison later lookups.
    ///
    /// # Errors
    /// Whatever `rule` fails with, or the replayed stored failure.
    pub fn apply<S, R>(
        &self,
        stream: &mut TokenStream<S>,
        ctx: &Context,
        rule: R,
    ) -> Parsed<T, K, V>
    where
        S: TokenSource<Kind = K, Value = V>,
        R: FnOnce(&mut TokenStream<S>, &Context) -> Parsed<T, K, V>,
    {
        let start = stream.mark();
        if ctx.reevaluates(start) {
            return rule(stream, ctx);
        }

        let key = (start, ctx.precedence());
        let hit = self.entries.borrow().get(&key).cloned();
        if let Some(entry) = hit {
            return match entry {
                CacheEntry::Success { node, end } => {
                    stream.reset(end);
                    Ok(node)
                }
                CacheEntry::Failed { error } => Err(error.into()),
            };
        }

        match rule(stream, ctx) {
            Ok(node) => {
                let end = stream.mark();
                self.entries.borrow_mut().insert(
                    key,
                    CacheEntry::Success {
                        node: node.clone(),
                        end,
                    },
                );
                Ok(node)
            }
            Err(Failure::Syntax(error)) => {
                self.entries.borrow_mut().insert(
                    key,
                    CacheEntry::Failed {
                        error: error.clone(),
                    },
                );
                Err(error.into())
            }
            Err(fatal) => Err(fatal),
        }
    }
}
