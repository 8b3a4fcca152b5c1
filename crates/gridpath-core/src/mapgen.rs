//! Random obstacle generation.
//!
//! Provides two passes over an [`ObstacleGrid`]:
//! - **Scatter**: blocks each cell independently with a given probability.
//! - **Cellular automata smoothing**: turns scattered noise into wall
//!   clumps, so the demo grids look hand-drawn rather than uniform.

use log::{debug, warn};
use rand::Rng;

use crate::{Cell, ObstacleGrid};

/// A rule for one round of cellular automata smoothing.
#[derive(Debug, Clone)]
pub struct SmoothingRule {
    /// A cell becomes an obstacle if at least this many of its 8 neighbors
    /// are obstacles.
    pub birth: usize,
    /// An obstacle stays an obstacle if at least this many of its 8
    /// neighbors are obstacles; otherwise it is cleared.
    pub survive: usize,
    /// Whether cells outside the grid count as obstacles.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for SmoothingRule {
    fn default() -> Self {
        Self {
            birth: 5,
            survive: 4,
            walls_out_of_range: false,
            reps: 2,
        }
    }
}

/// Obstacle generator driven by a caller-supplied RNG.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows x cols` grid: scatter obstacles at `density`
    /// (0.0–1.0), apply `rules`, then clear every cell in `keep_free`.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        density: f64,
        rules: &[SmoothingRule],
        keep_free: &[Cell],
    ) -> ObstacleGrid {
        let mut grid = ObstacleGrid::new(rows, cols);
        let blocked = self.scatter(&mut grid, density);
        debug!("scattered {blocked} obstacles over {rows}x{cols} grid");

        for rule in rules {
            smooth(&mut grid, rule);
        }

        for &cell in keep_free {
            if grid.set_blocked(cell, false).is_err() {
                warn!("cannot keep {cell} free: outside {rows}x{cols} grid");
            }
        }
        grid
    }

    /// Block each cell of `grid` with probability `density`, freeing the
    /// rest. Returns the number of obstacles placed.
    pub fn scatter(&mut self, grid: &mut ObstacleGrid, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for idx in 0..grid.len() {
            let r: f64 = self.rng.random();
            let blocked = r < density;
            if blocked {
                placed += 1;
            }
            grid.set_blocked_at(idx, blocked);
        }
        placed
    }
}

/// Apply `rule` to `grid` for `rule.reps` rounds.
pub fn smooth(grid: &mut ObstacleGrid, rule: &SmoothingRule) {
    let mut scratch = vec![false; grid.len()];
    for _ in 0..rule.reps {
        for (i, cell) in grid.cells().enumerate() {
            let walls = count_walls(grid, cell, rule.walls_out_of_range);
            scratch[i] = if grid.is_blocked(cell) {
                walls >= rule.survive
            } else {
                walls >= rule.birth
            };
        }
        for (idx, &blocked) in scratch.iter().enumerate() {
            grid.set_blocked_at(idx, blocked);
        }
    }
}

/// Count obstacle cells among the 8 neighbors of `center`.
fn count_walls(grid: &ObstacleGrid, center: Cell, walls_out_of_range: bool) -> usize {
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            match center.offset(dr, dc).filter(|&c| grid.in_bounds(c)) {
                Some(c) => {
                    if grid.is_blocked(c) {
                        count += 1;
                    }
                }
                None => {
                    if walls_out_of_range {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_extremes() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(1));
        let mut grid = ObstacleGrid::new(10, 10);
        assert_eq!(mg.scatter(&mut grid, 0.0), 0);
        assert_eq!(grid.count_obstacles(), 0);
        assert_eq!(mg.scatter(&mut grid, 1.0), 100);
        assert_eq!(grid.count_obstacles(), 100);
    }

    #[test]
    fn test_scatter_count_matches_grid() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(3));
        let mut grid = ObstacleGrid::new(12, 17);
        grid.fill(true);
        let placed = mg.scatter(&mut grid, 0.35);
        assert!(placed > 0 && placed < grid.len());
        assert_eq!(grid.count_obstacles(), placed);
    }

    #[test]
    fn test_generate_keeps_cells_free() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(7));
        let start = Cell::new(0, 0);
        let target = Cell::new(19, 19);
        let grid = mg.generate(20, 20, 0.9, &[], &[start, target]);
        assert!(grid.is_free(start));
        assert!(grid.is_free(target));
        assert!(grid.count_obstacles() > 0);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let rules = [SmoothingRule::default()];
        let a = MapGen::new(StdRng::seed_from_u64(42)).generate(15, 30, 0.4, &rules, &[]);
        let b = MapGen::new(StdRng::seed_from_u64(42)).generate(15, 30, 0.4, &rules, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_smoothing_clears_isolated_obstacle() {
        let mut grid = ObstacleGrid::new(5, 5);
        grid.set_blocked(Cell::new(2, 2), true).unwrap();
        smooth(&mut grid, &SmoothingRule::default());
        assert_eq!(grid.count_obstacles(), 0);
    }

    #[test]
    fn test_smoothing_fills_surrounded_hole() {
        let mut grid = ObstacleGrid::new(3, 3);
        grid.fill(true);
        grid.set_blocked(Cell::new(1, 1), false).unwrap();
        let rule = SmoothingRule {
            walls_out_of_range: true,
            reps: 1,
            ..SmoothingRule::default()
        };
        smooth(&mut grid, &rule);
        assert_eq!(grid.count_obstacles(), 9);
    }
}
