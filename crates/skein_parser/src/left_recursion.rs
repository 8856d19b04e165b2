//! Seed-growing resolution of left-recursive rules.
//!
//! A [`LeftRecursive`] cell makes a rule safe to invoke on itself at the
//! same start position, direct or indirect. The first (seed) run answers
//! same-position re-entries with a recoverable [`ParseError::RecursionGuard`]
//! so the rule's non-recursive alternatives can produce an initial parse;
//! the fixpoint loop then re-runs the body with the best parse so far
//! substituted for same-position re-entries, until no run consumes strictly
//! more input. The result is the maximal left-recursive parse, which is what
//! gives left-associative grammars their associativity.
//!
//! Frames are keyed by start mark inside each named cell, so
//! distinctly-named left-recursive rules nest freely: another rule's cell
//! simply holds no frame at this position and defers to full recursion.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use skein_lexer::TokenSource;

use crate::context::Context;
use crate::error::{Failure, FatalError, ParseError, Parsed};
use crate::stream::{Mark, TokenStream};

/// Per-start-position state of an in-flight left-recursive parse.
#[derive(Debug)]
enum Frame<T> {
    /// Seed run: same-position re-entries fail with a recursion guard.
    Base { guard_hit: bool },
    /// Fixpoint run: same-position re-entries replay the seed.
    Growing { node: T, end: Mark },
}

/// A left-recursion cell for one named rule.
#[derive(Debug)]
pub struct LeftRecursive<T> {
    name: &'static str,
    frames: RefCell<HashMap<Mark, Frame<T>>>,
}

impl<T: Clone> LeftRecursive<T> {
    /// Creates a cell for the rule called `name`.
    ///
    /// The name tags recursion guards and the fatal defect error; rules that
    /// share a cell share a name, which is what ties indirect recursion
    /// back to the right fixpoint.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            frames: RefCell::new(HashMap::new()),
        }
    }

    /// The rule name this cell was created with.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs `rule` with same-position self-invocation resolved.
    ///
    /// The body runs under a context that forces memoized cells at the
    /// start mark to re-evaluate, so no packrat cache records or replays
    /// seed-phase outcomes.
    ///
    /// # Errors
    /// The body's failure if no seed parse exists; escalated to
    /// [`FatalError::LeftRecursion`] when that failure consists of nothing
    /// but this rule's own recursion guards — every alternative was
    /// left-recursive, so the rule could never terminate here.
    pub fn apply<S, R>(
        &self,
        stream: &mut TokenStream<S>,
        ctx: &Context,
        mut rule: R,
    ) -> Parsed<T, S::Kind, S::Value>
    where
        S: TokenSource,
        R: FnMut(&mut TokenStream<S>, &Context) -> Parsed<T, S::Kind, S::Value>,
    {
        let start = stream.mark();

        // A frame at this position means we are re-entering ourselves.
        let reentry = {
            let mut frames = self.frames.borrow_mut();
            match frames.get_mut(&start) {
                Some(Frame::Base { guard_hit }) => {
                    *guard_hit = true;
                    Some(Err(ParseError::RecursionGuard { rule: self.name }.into()))
                }
                Some(Frame::Growing { node, end }) => Some(Ok((node.clone(), *end))),
                None => None,
            }
        };
        if let Some(result) = reentry {
            return result.map(|(node, end)| {
                stream.reset(end);
                node
            });
        }

        self.frames
            .borrow_mut()
            .insert(start, Frame::Base { guard_hit: false });
        let grow_ctx = ctx.with_reevaluation_at(start);

        let mut seed = match rule(stream, &grow_ctx) {
            Ok(node) => (node, stream.mark()),
            Err(failure) => {
                let frame = self.frames.borrow_mut().remove(&start);
                let guard_hit = matches!(frame, Some(Frame::Base { guard_hit: true }));
                return Err(match failure {
                    Failure::Syntax(error)
                        if guard_hit && error.is_only_recursion_guards(self.name) =>
                    {
                        FatalError::LeftRecursion { rule: self.name }.into()
                    }
                    other => other,
                });
            }
        };

        // Grow the seed until a run stops consuming strictly more input.
        loop {
            self.frames.borrow_mut().insert(
                start,
                Frame::Growing {
                    node: seed.0.clone(),
                    end: seed.1,
                },
            );
            stream.reset(start);
            match rule(stream, &grow_ctx) {
                Ok(node) => {
                    let end = stream.mark();
                    if end.partial_cmp(&seed.1) == Some(Ordering::Greater) {
                        seed = (node, end);
                    } else {
                        break;
                    }
                }
                Err(Failure::Syntax(_)) => break,
                Err(fatal) => {
                    self.frames.borrow_mut().remove(&start);
                    return Err(fatal);
                }
            }
        }

        self.frames.borrow_mut().remove(&start);
        stream.reset(seed.1);
        Ok(seed.0)
    }
}
