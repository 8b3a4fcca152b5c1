//! A binary occupancy grid.
//!
//! [`ObstacleGrid`] stores one flag per cell: [`FREE`] (0) or [`OBSTACLE`]
//! (1). Dimensions are fixed at construction; callers edit individual cells
//! between searches, and the search engines only ever borrow the grid.

use std::fmt;

use crate::{Cell, GridError};

/// Occupancy flag of a traversable cell.
pub const FREE: u8 = 0;
/// Occupancy flag of a blocked cell.
pub const OBSTACLE: u8 = 1;

/// A rectangular obstacle mask indexed by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl ObstacleGrid {
    /// Create a grid of the given size with every cell free.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![FREE; rows * cols],
        }
    }

    /// Build a grid from rows of occupancy flags.
    ///
    /// Every row must have the same non-zero width and every value must be
    /// [`FREE`] or [`OBSTACLE`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::NonRectangular {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != FREE && value != OBSTACLE {
                    return Err(GridError::NonBinary {
                        cell: Cell::new(r, c),
                        value,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Whether `cell` is inside the grid and not an obstacle.
    ///
    /// This is the single validity gate used by neighbor generation and the
    /// search engines.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.index(cell)] == FREE
    }

    /// Whether `cell` is inside the grid and an obstacle.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.index(cell)] == OBSTACLE
    }

    /// The occupancy flag at `cell`, or `None` if out of bounds.
    pub fn at(&self, cell: Cell) -> Option<u8> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(self.cells[self.index(cell)])
    }

    /// Fail with [`GridError::OutOfBounds`] unless `cell` is inside the grid.
    pub fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Mark `cell` as blocked or free.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        let idx = self.index(cell);
        self.cells[idx] = if blocked { OBSTACLE } else { FREE };
        Ok(())
    }

    /// Set the flag at row-major position `idx`, the order of
    /// [`cells`](Self::cells). `idx` must be below [`len`](Self::len).
    pub(crate) fn set_blocked_at(&mut self, idx: usize, blocked: bool) {
        self.cells[idx] = if blocked { OBSTACLE } else { FREE };
    }

    /// Flip the occupancy of `cell`, returning whether it is now blocked.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool, GridError> {
        self.check_bounds(cell)?;
        let idx = self.index(cell);
        self.cells[idx] = OBSTACLE - self.cells[idx];
        Ok(self.cells[idx] == OBSTACLE)
    }

    /// Block or free every cell.
    pub fn fill(&mut self, blocked: bool) {
        let value = if blocked { OBSTACLE } else { FREE };
        self.cells.fill(value);
    }

    /// Free every cell.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Count blocked cells.
    pub fn count_obstacles(&self) -> usize {
        self.cells.iter().filter(|&&v| v == OBSTACLE).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Cell::new(i / cols, i % cols))
    }

    /// Iterate over `(Cell, flag)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.cells().zip(self.cells.iter().copied())
    }

    /// Flat index of an in-bounds cell.
    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

/// Renders obstacles as `#` and free cells as `.`, one line per row.
impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                let ch = if self.cells[r * self.cols + c] == OBSTACLE {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_free() {
        let g = ObstacleGrid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.count_obstacles(), 0);
        assert!(g.is_free(Cell::new(2, 3)));
    }

    #[test]
    fn test_is_free_checks_bounds_first() {
        let g = ObstacleGrid::new(2, 2);
        assert!(!g.is_free(Cell::new(2, 0)));
        assert!(!g.is_free(Cell::new(0, 2)));
        assert!(!g.is_blocked(Cell::new(5, 5)));
        assert_eq!(g.at(Cell::new(9, 9)), None);
    }

    #[test]
    fn test_from_rows_validates_shape() {
        let err = ObstacleGrid::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NonRectangular {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        let empty: [Vec<u8>; 0] = [];
        assert_eq!(ObstacleGrid::from_rows(&empty).unwrap_err(), GridError::Empty);
        assert_eq!(
            ObstacleGrid::from_rows(&[Vec::<u8>::new()]).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn test_from_rows_rejects_non_binary() {
        let err = ObstacleGrid::from_rows(&[[0u8, 2]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NonBinary {
                cell: Cell::new(0, 1),
                value: 2
            }
        );
    }

    #[test]
    fn test_toggle_and_set() {
        let mut g = ObstacleGrid::new(3, 3);
        let c = Cell::new(1, 1);
        assert_eq!(g.toggle(c), Ok(true));
        assert!(g.is_blocked(c));
        assert_eq!(g.toggle(c), Ok(false));
        assert!(g.is_free(c));
        g.set_blocked(c, true).unwrap();
        assert_eq!(g.at(c), Some(OBSTACLE));
        assert!(matches!(
            g.toggle(Cell::new(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_fill_and_count() {
        let mut g = ObstacleGrid::new(4, 4);
        g.fill(true);
        assert_eq!(g.count_obstacles(), 16);
        g.set_blocked(Cell::new(0, 0), false).unwrap();
        assert_eq!(g.count_obstacles(), 15);
        g.clear();
        assert_eq!(g.count_obstacles(), 0);
    }

    #[test]
    fn test_iter_row_major() {
        let g = ObstacleGrid::from_rows(&[[0u8, 1, 0], [0, 0, 0]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Cell::new(0, 1), OBSTACLE));
        assert_eq!(items[3].0, Cell::new(1, 0));
    }

    #[test]
    fn test_display() {
        let g = ObstacleGrid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        assert_eq!(g.to_string(), ".#\n#.");
    }
}
