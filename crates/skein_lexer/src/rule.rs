//! Declarative lexical rules.
//!
//! A rule pairs a token kind with a pattern (literal text or a regular
//! expression) and an optional mapper that decodes the matched text into a
//! value. The tokenizer evaluates every rule at every position; declaration
//! order breaks length ties.

use regex::Regex;

/// A lexical pattern, matched only at the start of the remaining input.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches this exact text.
    Literal(String),
    /// Matches this regular expression, anchored at offset 0.
    Regex(Regex),
}

impl Pattern {
    /// Returns the byte length of the match at the start of `rest`, if any.
    #[must_use]
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Self::Literal(text) => rest.starts_with(text.as_str()).then_some(text.len()),
            // The regex is \A-anchored at construction, so any find is at 0.
            Self::Regex(regex) => regex.find(rest).map(|found| found.end()),
        }
    }
}

/// One rule of a tokenizer's rule table.
pub struct LexRule<K, V> {
    /// The kind assigned to tokens this rule produces.
    pub kind: K,
    /// The pattern this rule matches.
    pub pattern: Pattern,
    /// Decodes matched text into the token's value.
    pub mapper: Option<Box<dyn Fn(&str) -> V>>,
}

impl<K, V> LexRule<K, V> {
    /// Creates a rule matching exact literal text.
    #[must_use]
    pub fn literal(kind: K, text: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: Pattern::Literal(text.into()),
            mapper: None,
        }
    }

    /// Creates a rule matching a regular expression.
    ///
    /// The pattern is anchored so it can only match at the start of the
    /// remaining input.
    ///
    /// # Errors
    /// Returns the underlying error if the pattern fails to compile.
    pub fn regex(kind: K, pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!(r"\A(?:{pattern})"))?;
        Ok(Self {
            kind,
            pattern: Pattern::Regex(anchored),
            mapper: None,
        })
    }

    /// Attaches a mapper that decodes matched text into the token's value.
    #[must_use]
    pub fn with_mapper(mut self, mapper: impl Fn(&str) -> V + 'static) -> Self {
        self.mapper = Some(Box::new(mapper));
        self
    }
}
