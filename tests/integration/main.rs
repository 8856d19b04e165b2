//! Cross-layer integration tests for Skein
//!
//! Tests that drive the lexer and parser together through a complete
//! expression grammar.
