use std::fmt;

use crate::Cell;

/// Errors raised while building or parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An occupancy value other than 0 or 1.
    NonBinary { cell: Cell, value: u8 },
    /// A cell lies outside the grid.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    /// A layout line is wider or narrower than the first one.
    InconsistentLayout(String),
    /// A layout character outside the accepted glyph set.
    InvalidGlyph { ch: char, cell: Cell },
    /// A start or target marker appears more than once in a layout.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: zero rows or columns"),
            Self::NonRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::NonBinary { cell, value } => {
                write!(f, "grid: occupancy at {cell} is {value}, expected 0 or 1")
            }
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "grid: {cell} is outside the {rows}x{cols} grid")
            }
            Self::InconsistentLayout(s) => write!(f, "layout: inconsistent width:\n{s}"),
            Self::InvalidGlyph { ch, cell } => {
                write!(f, "layout: invalid glyph \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "layout: marker \u{201c}{ch}\u{201d} at {second} already placed at {first}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
