use std::fmt;
use std::str::FromStr;

use gridpath_core::{Cell, ObstacleGrid};

use crate::distance::{euclidean, step_cost};
use crate::error::ParseError;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Axis-aligned offsets in emission order: right, down, left, up.
const STRAIGHT: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal offsets in emission order: down-right, down-left, up-right,
/// up-left.
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Which moves a search may take from a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Axis-aligned moves only.
    Four,
    /// Axis-aligned and diagonal moves. A diagonal move is only allowed
    /// when both cells it squeezes between are free.
    #[default]
    Eight,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => write!(f, "4-way"),
            Self::Eight => write!(f, "8-way"),
        }
    }
}

impl FromStr for Movement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "four" | "4-way" | "cardinal" => Ok(Self::Four),
            "8" | "eight" | "8-way" | "diagonal" => Ok(Self::Eight),
            _ => Err(ParseError::new("movement", s)),
        }
    }
}

fn push_straight(c: Cell, free: &impl Fn(Cell) -> bool, buf: &mut Vec<Cell>) {
    for (dr, dc) in STRAIGHT {
        if let Some(n) = c.offset(dr, dc).filter(|&n| free(n)) {
            buf.push(n);
        }
    }
}

/// Diagonal neighbors additionally require both orthogonal corner cells
/// to be free, so a path never cuts through the corner of an obstacle.
fn push_diagonal(c: Cell, free: &impl Fn(Cell) -> bool, buf: &mut Vec<Cell>) {
    for (dr, dc) in DIAGONAL {
        let Some(n) = c.offset(dr, dc) else {
            continue;
        };
        if !free(n) {
            continue;
        }
        let side = c.offset(0, dc).is_some_and(free);
        let below = c.offset(dr, 0).is_some_and(free);
        if side && below {
            buf.push(n);
        }
    }
}

/// Reachable neighbors of `c` on `grid` under `movement`, in emission order.
pub fn neighbors(grid: &ObstacleGrid, c: Cell, movement: Movement) -> Vec<Cell> {
    let mut buf = Vec::with_capacity(8);
    GridPather::new(grid, movement).neighbors(c, &mut buf);
    buf
}

/// Adapts an [`ObstacleGrid`] to the pather traits.
///
/// Costs are 1 for straight steps and √2 for diagonal ones; the estimate is
/// the Euclidean distance, which never exceeds the true cost under either
/// movement rule.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a ObstacleGrid,
    movement: Movement,
}

impl<'a> GridPather<'a> {
    /// Create a pather borrowing `grid`.
    pub fn new(grid: &'a ObstacleGrid, movement: Movement) -> Self {
        Self { grid, movement }
    }

    /// The borrowed grid.
    pub fn grid(&self) -> &'a ObstacleGrid {
        self.grid
    }

    /// The movement rule.
    pub fn movement(&self) -> Movement {
        self.movement
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let free = |n: Cell| self.grid.is_free(n);
        push_straight(c, &free, buf);
        if self.movement == Movement::Eight {
            push_diagonal(c, &free, buf);
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }
}
