//! Explicit graphs for exercising engine internals.

use gridpath_core::Cell;

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Five cells on row 0 with two routes from column 0 to column 3:
/// `0 -1-> 1 -5-> 3` and `0 -2-> 2 -1-> 3`, then `3 -1-> 4`.
///
/// Column 3 is first queued through the expensive route and improved when
/// column 2 is expanded, leaving a stale entry behind. The estimate is
/// always 0.
pub(crate) struct Diamond;

impl Pather for Diamond {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        let cols: &[usize] = match p.col {
            0 => &[1, 2],
            1 | 2 => &[3],
            3 => &[4],
            _ => &[],
        };
        buf.extend(cols.iter().map(|&col| Cell::new(0, col)));
    }
}

impl WeightedPather for Diamond {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        match (from.col, to.col) {
            (0, 2) => 2.0,
            (1, 3) => 5.0,
            _ => 1.0,
        }
    }
}

impl AstarPather for Diamond {
    fn estimate(&self, _: Cell, _: Cell) -> f64 {
        0.0
    }
}
