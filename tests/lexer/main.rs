//! Integration tests for Layer 0: Lexer
//!
//! Tests for rule-table tokenization and token filtering.
