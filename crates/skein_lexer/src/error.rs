//! Lexical error types.
//!
//! A scan failure is fatal: there is no lexical backtracking, so an
//! unmatched character aborts tokenization entirely.

use thiserror::Error;

use crate::location::Location;

/// Maximum number of characters of unmatched input quoted in a scan error.
pub const PREVIEW_LEN: usize = 15;

/// No lexical rule matched the remaining input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no lexical rule matched at {location}: {preview:?}")]
pub struct ScanError {
    /// The first few characters of the unmatched remainder.
    pub preview: String,
    /// Where in the source the match failed.
    pub location: Location,
}

impl ScanError {
    /// Creates a scan error, truncating `remainder` to the preview length.
    #[must_use]
    pub fn new(remainder: &str, location: Location) -> Self {
        Self {
            preview: remainder.chars().take(PREVIEW_LEN).collect(),
            location,
        }
    }
}
