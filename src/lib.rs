//! Skein - Lexing and backtracking-parsing engine
//!
//! This crate re-exports both layers of the Skein system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: skein_parser — Token stream, combinators, packrat cache,
//!          left recursion, precedence climbing
//! Layer 0: skein_lexer  — Rule-table tokenizer, token filtering, locations
//! ```

pub use skein_lexer as lexer;
pub use skein_parser as parser;
