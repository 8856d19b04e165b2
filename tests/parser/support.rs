//! Shared fixtures: an arithmetic vocabulary and stream constructor.

use skein_lexer::{Filtered, LexRule, TokenSource, Tokenizer};
use skein_parser::{Parsed, TokenStream};

pub type Kind = &'static str;
pub type Stream<'src> = TokenStream<Filtered<Tokenizer<'src, Kind, i64>>>;
pub type Out<T> = Parsed<T, Kind, i64>;

/// A stream over arithmetic source, whitespace already dropped.
pub fn stream(source: &str) -> Stream<'_> {
    let tokenizer = Tokenizer::new(
        source,
        vec![
            LexRule::regex("number", "[0-9]+")
                .expect("pattern compiles")
                .with_mapper(|text| text.parse().unwrap_or(0)),
            LexRule::literal("plus", "+"),
            LexRule::literal("minus", "-"),
            LexRule::literal("times", "*"),
            LexRule::literal("divide", "/"),
            LexRule::literal("caret", "^"),
            LexRule::literal("open", "("),
            LexRule::literal("close", ")"),
            LexRule::regex("space", "[ \\t\\n]+").expect("pattern compiles"),
        ],
    );
    TokenStream::new(tokenizer.filtered(vec!["space"]))
}
