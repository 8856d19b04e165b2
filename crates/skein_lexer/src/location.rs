//! Source location tracking.
//!
//! `Location` tracks the line/column position of tokens in source text for
//! error reporting. Both coordinates are 1-based.

use std::fmt;

/// A line/column position in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Creates a location at the start of input (line 1, column 1).
    #[must_use]
    pub const fn at_start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Advances this location past the given consumed text.
    ///
    /// Every newline in `text` increments the line and resets the column to
    /// 1; characters after the last newline (or all of them, if there is
    /// none) advance the column.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::at_start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
