//! Immutable configuration threaded through rule calls.
//!
//! The context replaces ambient parser state: rules pass configuration (a
//! precedence level, a forced re-evaluation) to nested calls by handing down
//! an extended copy, so backtracked branches can never observe each other's
//! changes.

use crate::stream::Mark;

/// Caller-supplied configuration, extended by structural update only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    precedence: usize,
    reevaluate: Option<Mark>,
}

impl Context {
    /// Creates the initial (empty) context for a parse run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current precedence level; 0 (loosest) unless set.
    #[must_use]
    pub const fn precedence(&self) -> usize {
        self.precedence
    }

    /// A copy of this context at the given precedence level.
    #[must_use]
    pub fn with_precedence(&self, precedence: usize) -> Self {
        Self {
            precedence,
            ..self.clone()
        }
    }

    /// A copy of this context that forces memoized rules at `mark` to
    /// re-evaluate instead of consulting their cache.
    #[must_use]
    pub fn with_reevaluation_at(&self, mark: Mark) -> Self {
        Self {
            reevaluate: Some(mark),
            ..self.clone()
        }
    }

    /// True if a forced re-evaluation is active for exactly `mark`.
    #[must_use]
    pub fn reevaluates(&self, mark: Mark) -> bool {
        self.reevaluate == Some(mark)
    }
}
