//! Integration tests for packrat caching
//!
//! Tests that memoized rules run once per (position, precedence), that
//! failures are replayed too, and that fatal failures never enter the cache.

use std::cell::Cell;

use skein_parser::{Cached, Context, Failure, attempt, choice};

use crate::support::{Kind, Out, Stream, stream};

/// A memoized number rule that counts how often its body actually runs.
struct Counting {
    cache: Cached<i64, Kind, i64>,
    runs: Cell<usize>,
}

impl Counting {
    fn new() -> Self {
        Self {
            cache: Cached::new(),
            runs: Cell::new(0),
        }
    }

    fn number(&self, stream: &mut Stream<'_>, ctx: &Context) -> Out<i64> {
        self.cache.apply(stream, ctx, |stream, _ctx| {
            self.runs.set(self.runs.get() + 1);
            let token = stream.expect("number")?;
            Ok(token.value.unwrap_or(0))
        })
    }
}

#[test]
fn success_at_a_position_runs_once() {
    let rule = Counting::new();
    let mut stream = stream("7 + 8");
    let ctx = Context::new();

    // A sum alternative that parses the number, then fails and backtracks.
    let failure = attempt(&mut stream, &ctx, |s: &mut Stream<'_>, c: &Context| {
        let lhs = rule.number(s, c)?;
        s.expect("times")?;
        Ok(lhs)
    })
    .expect_err("no times");
    assert!(!failure.is_fatal());

    // The fallback re-parses the same number from the cache.
    assert_eq!(rule.number(&mut stream, &ctx).expect("replays"), 7);
    assert_eq!(rule.runs.get(), 1);

    // The replay also restored the stream to the stored end.
    assert_eq!(stream.peek().expect("token").text(), "+");
}

#[test]
fn each_position_is_cached_separately() {
    let rule = Counting::new();
    let mut stream = stream("1 2");
    let ctx = Context::new();
    assert_eq!(rule.number(&mut stream, &ctx).expect("parses"), 1);
    assert_eq!(rule.number(&mut stream, &ctx).expect("parses"), 2);
    assert_eq!(rule.runs.get(), 2);
}

#[test]
fn failures_are_replayed_without_rerunning() {
    let rule = Counting::new();
    let mut stream = stream("+");
    let ctx = Context::new();

    let first = choice(&mut stream, &ctx, &[&|s: &mut Stream<'_>, c: &Context| {
        rule.number(s, c)
    }])
    .expect_err("no number");
    let second = choice(&mut stream, &ctx, &[&|s: &mut Stream<'_>, c: &Context| {
        rule.number(s, c)
    }])
    .expect_err("no number");

    assert_eq!(first, second);
    assert_eq!(rule.runs.get(), 1);
}

#[test]
fn precedence_levels_do_not_share_entries() {
    let rule = Counting::new();
    let mut stream = stream("5");
    let ctx = Context::new();
    let start = stream.mark();

    assert_eq!(rule.number(&mut stream, &ctx).expect("parses"), 5);
    stream.reset(start);
    assert_eq!(
        rule.number(&mut stream, &ctx.with_precedence(1)).expect("parses"),
        5
    );
    // Different keys, so the body ran for each level.
    assert_eq!(rule.runs.get(), 2);

    // Same key replays.
    stream.reset(start);
    rule.number(&mut stream, &ctx).expect("replays");
    assert_eq!(rule.runs.get(), 2);
}

#[test]
fn fatal_failures_are_not_cached() {
    let rule = Counting::new();
    let mut stream = stream("@");
    let ctx = Context::new();

    assert!(matches!(
        rule.number(&mut stream, &ctx).expect_err("scan failure"),
        Failure::Fatal(_)
    ));
    assert!(matches!(
        rule.number(&mut stream, &ctx).expect_err("scan failure"),
        Failure::Fatal(_)
    ));
    // Both invocations reached the body; nothing was stored.
    assert_eq!(rule.runs.get(), 2);
}
