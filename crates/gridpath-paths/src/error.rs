use std::fmt;

use gridpath_core::{Cell, GridError};

/// Input-validation failures reported by
/// [`SearchEngine::try_find_path`](crate::SearchEngine::try_find_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start cell lies outside the grid.
    StartOutOfBounds(GridError),
    /// The target cell lies outside the grid.
    TargetOutOfBounds(GridError),
    /// The start cell is an obstacle.
    StartBlocked(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(e) => write!(f, "invalid start: {e}"),
            Self::TargetOutOfBounds(e) => write!(f, "invalid target: {e}"),
            Self::StartBlocked(cell) => write!(f, "invalid start: {cell} is an obstacle"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StartOutOfBounds(e) | Self::TargetOutOfBounds(e) => Some(e),
            Self::StartBlocked(_) => None,
        }
    }
}

/// A name that does not match any known algorithm, movement rule or greedy
/// priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    what: &'static str,
    input: String,
}

impl ParseError {
    pub(crate) fn new(what: &'static str, input: &str) -> Self {
        Self {
            what,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: \u{201c}{}\u{201d}", self.what, self.input)
    }
}

impl std::error::Error for ParseError {}
