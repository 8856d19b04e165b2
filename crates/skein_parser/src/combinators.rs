//! The combinator library: attempt, choice, repetition, optionality.
//!
//! Combinators are free functions over `(&mut TokenStream, &Context, rule)`.
//! They absorb only [`Failure::Syntax`]; a [`Failure::Fatal`] passes through
//! every one of them unmodified, so lexical failures and grammar defects can
//! never be backtracked over.

use skein_lexer::TokenSource;

use crate::context::Context;
use crate::error::{Failure, ParseError, Parsed};
use crate::stream::TokenStream;

/// A choice alternative: any rule, borrowed as a trait object.
pub type Alternative<'a, S, T> = &'a dyn Fn(
    &mut TokenStream<S>,
    &Context,
) -> Parsed<T, <S as TokenSource>::Kind, <S as TokenSource>::Value>;

/// Runs `rule` transactionally: on any failure the stream is reset to where
/// it was before the attempt, so no partial consumption survives.
///
/// # Errors
/// Whatever `rule` fails with, after the reset.
pub fn attempt<S, T, R>(
    stream: &mut TokenStream<S>,
    ctx: &Context,
    rule: R,
) -> Parsed<T, S::Kind, S::Value>
where
    S: TokenSource,
    R: FnOnce(&mut TokenStream<S>, &Context) -> Parsed<T, S::Kind, S::Value>,
{
    let start = stream.mark();
    let result = rule(stream, ctx);
    if result.is_err() {
        stream.reset(start);
    }
    result
}

/// Tries each alternative in order via [`attempt`]; the first success wins.
///
/// # Errors
/// If every alternative fails recoverably, a flattened
/// [`ParseError::Alternatives`] over all their failures. A fatal failure
/// propagates immediately, abandoning the remaining alternatives.
pub fn choice<S, T>(
    stream: &mut TokenStream<S>,
    ctx: &Context,
    alternatives: &[Alternative<'_, S, T>],
) -> Parsed<T, S::Kind, S::Value>
where
    S: TokenSource,
{
    let mut causes = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match attempt(stream, ctx, alternative) {
            Ok(value) => return Ok(value),
            Err(Failure::Syntax(error)) => causes.push(error),
            Err(fatal) => return Err(fatal),
        }
    }
    Err(ParseError::alternatives(causes).into())
}

/// Applies `rule` as many times as it succeeds, zero or more.
///
/// Returns the collected successes together with the recoverable error that
/// ended the repetition — callers surface it for better diagnostics on
/// trailing input. Never fails recoverably. A rule that succeeds without
/// consuming will loop; bounding that is the grammar author's concern.
///
/// # Errors
/// Only a fatal failure from `rule`.
pub fn repeated<S, T, R>(
    stream: &mut TokenStream<S>,
    ctx: &Context,
    mut rule: R,
) -> Result<(Vec<T>, ParseError<S::Kind, S::Value>), Failure<S::Kind, S::Value>>
where
    S: TokenSource,
    R: FnMut(&mut TokenStream<S>, &Context) -> Parsed<T, S::Kind, S::Value>,
{
    let mut items = Vec::new();
    loop {
        match attempt(stream, ctx, &mut rule) {
            Ok(item) => items.push(item),
            Err(Failure::Syntax(error)) => return Ok((items, error)),
            Err(fatal) => return Err(fatal),
        }
    }
}

/// Like [`repeated`], but requires at least `min` successes.
///
/// # Errors
/// The error that ended the repetition, if fewer than `min` items matched;
/// any fatal failure from `rule`.
pub fn repeated_required<S, T, R>(
    stream: &mut TokenStream<S>,
    ctx: &Context,
    min: usize,
    rule: R,
) -> Result<(Vec<T>, ParseError<S::Kind, S::Value>), Failure<S::Kind, S::Value>>
where
    S: TokenSource,
    R: FnMut(&mut TokenStream<S>, &Context) -> Parsed<T, S::Kind, S::Value>,
{
    let (items, last_error) = repeated(stream, ctx, rule)?;
    if items.len() < min {
        return Err(last_error.into());
    }
    Ok((items, last_error))
}

/// Applies `rule` at most once.
///
/// Returns the value on success, or the absorbed recoverable error on
/// failure; never fails recoverably itself.
///
/// # Errors
/// Only a fatal failure from `rule`.
pub fn optional<S, T, R>(
    stream: &mut TokenStream<S>,
    ctx: &Context,
    rule: R,
) -> Result<(Option<T>, Option<ParseError<S::Kind, S::Value>>), Failure<S::Kind, S::Value>>
where
    S: TokenSource,
    R: FnOnce(&mut TokenStream<S>, &Context) -> Parsed<T, S::Kind, S::Value>,
{
    match attempt(stream, ctx, rule) {
        Ok(value) => Ok((Some(value), None)),
        Err(Failure::Syntax(error)) => Ok((None, Some(error))),
        Err(fatal) => Err(fatal),
    }
}
