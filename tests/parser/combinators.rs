//! Integration tests for the combinators
//!
//! Tests transactional backtracking, ordered choice, repetition, and the
//! fatal/recoverable split as seen through real token streams.

use skein_parser::{Context, Failure, ParseError, attempt, choice, optional, repeated, repeated_required};

use crate::support::{Out, Stream, stream};

fn number(stream: &mut Stream<'_>, _ctx: &Context) -> Out<i64> {
    let token = stream.expect("number")?;
    Ok(token.value.unwrap_or(0))
}

fn sum_pair(stream: &mut Stream<'_>, ctx: &Context) -> Out<i64> {
    let lhs = number(stream, ctx)?;
    stream.expect("plus")?;
    let rhs = number(stream, ctx)?;
    Ok(lhs + rhs)
}

// =============================================================================
// attempt
// =============================================================================

#[test]
fn attempt_resets_partial_consumption_on_failure() {
    let mut stream = stream("1 + +");
    let ctx = Context::new();
    // Consumes "1" and "+" before failing on the second "+".
    let failure = attempt(&mut stream, &ctx, sum_pair).expect_err("no rhs");
    assert!(!failure.is_fatal());
    // The stream is back at the start.
    assert_eq!(stream.peek().expect("token").text(), "1");
}

#[test]
fn attempt_keeps_consumption_on_success() {
    let mut stream = stream("1 + 2 *");
    let ctx = Context::new();
    assert_eq!(attempt(&mut stream, &ctx, sum_pair).expect("parses"), 3);
    assert_eq!(stream.peek().expect("token").text(), "*");
}

// =============================================================================
// choice
// =============================================================================

#[test]
fn choice_takes_the_first_alternative_that_fits() {
    let mut stream = stream("1 + 2");
    let ctx = Context::new();
    let value = choice(&mut stream, &ctx, &[&sum_pair, &number]).expect("parses");
    assert_eq!(value, 3);
}

#[test]
fn choice_falls_through_after_a_failed_prefix() {
    // sum_pair consumes "1" before failing; the fallback must see it again.
    let mut stream = stream("1 * 2");
    let ctx = Context::new();
    let value = choice(&mut stream, &ctx, &[&sum_pair, &number]).expect("parses");
    assert_eq!(value, 1);
    assert_eq!(stream.peek().expect("token").text(), "*");
}

#[test]
fn choice_failure_collects_one_cause_per_alternative() {
    let mut stream = stream("*");
    let ctx = Context::new();
    let failure = choice(&mut stream, &ctx, &[&sum_pair, &number]).expect_err("no match");
    let Failure::Syntax(error) = failure else {
        panic!("expected a recoverable failure");
    };
    assert_eq!(error.causes().len(), 2);
}

#[test]
fn nested_choice_failures_stay_flat() {
    let inner = |s: &mut Stream<'_>, c: &Context| choice(s, c, &[&sum_pair, &number]);
    let mut stream = stream("*");
    let ctx = Context::new();
    let failure = choice(&mut stream, &ctx, &[&inner, &number]).expect_err("no match");
    let Failure::Syntax(error) = failure else {
        panic!("expected a recoverable failure");
    };
    // Two causes from the inner choice, spliced, plus the outer number.
    assert_eq!(error.causes().len(), 3);
    assert!(
        error
            .causes()
            .iter()
            .all(|cause| !matches!(cause, ParseError::Alternatives(_)))
    );
}

#[test]
fn choice_does_not_absorb_fatal_failures() {
    let mut stream = stream("@");
    let ctx = Context::new();
    let failure = choice(&mut stream, &ctx, &[&number, &number]).expect_err("scan failure");
    assert!(failure.is_fatal());
}

// =============================================================================
// repetition
// =============================================================================

#[test]
fn repeated_collects_until_failure() {
    let mut stream = stream("1 2 3 +");
    let ctx = Context::new();
    let (items, last_error) = repeated(&mut stream, &ctx, number).expect("no fatal");
    assert_eq!(items, [1, 2, 3]);
    assert!(matches!(last_error, ParseError::TokenMismatch { .. }));
    // The failed attempt did not consume the "+".
    assert_eq!(stream.peek().expect("token").text(), "+");
}

#[test]
fn repeated_accepts_zero_matches() {
    let mut stream = stream("+");
    let ctx = Context::new();
    let (items, last_error) = repeated(&mut stream, &ctx, number).expect("no fatal");
    assert!(items.is_empty());
    assert!(matches!(last_error, ParseError::TokenMismatch { .. }));
}

#[test]
fn repeated_required_enforces_the_minimum() {
    let mut stream = stream("1 +");
    let ctx = Context::new();
    let failure = repeated_required(&mut stream, &ctx, 2, number).expect_err("one short");
    assert!(matches!(
        failure,
        Failure::Syntax(ParseError::TokenMismatch { .. })
    ));

    let mut stream = crate::support::stream("1 2 +");
    let (items, _) = repeated_required(&mut stream, &ctx, 2, number).expect("enough");
    assert_eq!(items, [1, 2]);
}

// =============================================================================
// optional
// =============================================================================

#[test]
fn optional_returns_value_or_absorbed_error() {
    let ctx = Context::new();

    let mut stream = stream("7");
    let (value, error) = optional(&mut stream, &ctx, number).expect("no fatal");
    assert_eq!(value, Some(7));
    assert!(error.is_none());

    let mut stream = crate::support::stream("+");
    let (value, error) = optional(&mut stream, &ctx, number).expect("no fatal");
    assert!(value.is_none());
    assert!(matches!(error, Some(ParseError::TokenMismatch { .. })));
    assert_eq!(stream.peek().expect("token").text(), "+");
}

#[test]
fn optional_does_not_absorb_fatal_failures() {
    let mut stream = stream("@");
    let ctx = Context::new();
    assert!(optional(&mut stream, &ctx, number).expect_err("scan failure").is_fatal());
}
