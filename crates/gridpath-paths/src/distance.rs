use gridpath_core::Cell;

/// Cost of an axis-aligned step.
pub const STRAIGHT_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let (dr, dc) = a.delta(b);
    ((dr * dr + dc * dc) as f64).sqrt()
}

/// Cost of a single step between adjacent cells, derived from their delta.
#[inline]
pub fn step_cost(from: Cell, to: Cell) -> f64 {
    let (dr, dc) = from.delta(to);
    if dr != 0 && dc != 0 {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Total step cost along a path. Empty and single-cell paths cost 0.
pub fn path_cost(path: &[Cell]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
