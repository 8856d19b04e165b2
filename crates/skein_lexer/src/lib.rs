//! Rule-table tokenizer and token filtering for Skein.
//!
//! This crate provides:
//! - [`LexRule`] - Declarative lexical rules (literal or regex patterns)
//! - [`Tokenizer`] - Lazy longest-match tokenization over a rule table
//! - [`Filtered`] - A token-source adapter that drops designated kinds
//! - [`Token`], [`Location`], [`SourceId`] - The lexical data model
//! - [`TokenSource`] - The boundary trait consumed by the parser layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod filter;
pub mod location;
pub mod rule;
pub mod source;
pub mod token;
pub mod tokenizer;


pub use error::ScanError;
pub use filter::Filtered;
pub use location::Location;
pub use rule::{LexRule, Pattern};
pub use source::{SourceId, TokenSource};
pub use token::Token;
pub use tokenizer::Tokenizer;
