//! Grids described as ASCII art.
//!
//! A [`Layout`] parses a block of text into an [`ObstacleGrid`] plus the
//! optional start and target markers:
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `.` | free cell |
//! | `#` | obstacle |
//! | `S` | start (free) |
//! | `T` | target (free) |
//!
//! Lines are separated by `'\n'` and must all have the same width. Leading
//! and trailing whitespace is trimmed from the whole string, not from
//! individual lines.

use std::fmt;

use crate::{Cell, GridError, ObstacleGrid};

const START: char = 'S';
const TARGET: char = 'T';

/// A parsed grid together with its start and target markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: ObstacleGrid,
    pub start: Option<Cell>,
    pub target: Option<Cell>,
}

impl Layout {
    /// Parse an ASCII layout.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut start: Option<Cell> = None;
        let mut target: Option<Cell> = None;

        for (r, line) in s.split('\n').enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r, c);
                let flag = match ch {
                    '.' => 0,
                    '#' => 1,
                    START => {
                        place_marker(&mut start, ch, cell)?;
                        0
                    }
                    TARGET => {
                        place_marker(&mut target, ch, cell)?;
                        0
                    }
                    _ => return Err(GridError::InvalidGlyph { ch, cell }),
                };
                row.push(flag);
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(GridError::InconsistentLayout(s.to_string()));
                }
            }
            rows.push(row);
        }

        let grid = ObstacleGrid::from_rows(&rows)?;
        Ok(Self {
            grid,
            start,
            target,
        })
    }
}

fn place_marker(slot: &mut Option<Cell>, ch: char, cell: Cell) -> Result<(), GridError> {
    if let Some(first) = *slot {
        return Err(GridError::DuplicateMarker {
            ch,
            first,
            second: cell,
        });
    }
    *slot = Some(cell);
    Ok(())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.grid.cols() {
                let cell = Cell::new(r, c);
                let ch = if Some(cell) == self.start {
                    START
                } else if Some(cell) == self.target {
                    TARGET
                } else if self.grid.is_blocked(cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
