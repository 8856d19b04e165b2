//! Backtracking parser engine for Skein.
//!
//! This crate provides:
//! - [`TokenStream`] - Buffered token cursor with mark/reset checkpointing
//! - [`ParseError`] / [`FatalError`] / [`Failure`] - The failure taxonomy
//! - [`combinators`] - attempt, choice, repeated, optional
//! - [`Cached`] - Per-rule packrat memoization
//! - [`LeftRecursive`] - Seed-growing left-recursion resolution
//! - [`Precedented`] - Precedence-climbing over an ordered level table
//! - [`Context`] - Immutable configuration threaded through rule calls
//!
//! Rules are plain functions (usually methods on a grammar value) of shape
//! `Fn(&mut TokenStream<S>, &Context) -> Parsed<T, K, V>`; the combinators
//! absorb only [`Failure::Syntax`] and let [`Failure::Fatal`] escape, which
//! is what keeps lexical failures and grammar defects out of backtracking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod combinators;
pub mod context;
pub mod error;
pub mod left_recursion;
pub mod precedence;
pub mod stream;

pub use cache::Cached;
pub use combinators::{attempt, choice, optional, repeated, repeated_required};
pub use context::Context;
pub use error::{Failure, FatalError, ParseError, Parsed};
pub use left_recursion::LeftRecursive;
pub use precedence::{LevelRule, Precedented};
pub use stream::{Mark, TokenStream};
