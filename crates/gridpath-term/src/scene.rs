//! Composition of a grid and search results into drawable tiles.

use std::collections::HashSet;

use gridpath_core::{Cell, ObstacleGrid};
use gridpath_paths::Algorithm;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Free,
    Obstacle,
    Start,
    Target,
    Visited,
    Path(Algorithm),
}

/// A grid plus the overlays drawn on top of it.
///
/// Precedence, highest first: obstacle, start, target, path, visited,
/// free. When paths overlap, the one added last wins.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    grid: &'a ObstacleGrid,
    start: Option<Cell>,
    target: Option<Cell>,
    visited: HashSet<Cell>,
    paths: Vec<(Algorithm, HashSet<Cell>)>,
}

impl<'a> Scene<'a> {
    /// Create a scene with no overlays.
    pub fn new(grid: &'a ObstacleGrid, start: Option<Cell>, target: Option<Cell>) -> Self {
        Self {
            grid,
            start,
            target,
            visited: HashSet::new(),
            paths: Vec::new(),
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a ObstacleGrid {
        self.grid
    }

    /// Reveal a visited cell.
    pub fn mark_visited(&mut self, cell: Cell) {
        self.visited.insert(cell);
    }

    /// Hide every visited cell, e.g. before animating the next algorithm.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    /// Number of distinct cells revealed.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Overlay the path found by `algorithm`, replacing any earlier one.
    pub fn set_path(&mut self, algorithm: Algorithm, path: &[Cell]) {
        self.paths.retain(|(a, _)| *a != algorithm);
        self.paths.push((algorithm, path.iter().copied().collect()));
    }

    /// The tile shown at `cell`.
    pub fn tile(&self, cell: Cell) -> Tile {
        if self.grid.is_blocked(cell) {
            return Tile::Obstacle;
        }
        if Some(cell) == self.start {
            return Tile::Start;
        }
        if Some(cell) == self.target {
            return Tile::Target;
        }
        if let Some((alg, _)) = self.paths.iter().rev().find(|(_, p)| p.contains(&cell)) {
            return Tile::Path(*alg);
        }
        if self.visited.contains(&cell) {
            return Tile::Visited;
        }
        Tile::Free
    }

    /// Tiles of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Tile> + '_ {
        (0..self.grid.cols()).map(move |col| self.tile(Cell::new(row, col)))
    }

    /// Render as text, one line per row: `#` obstacle, `S`/`T` endpoints,
    /// `*` path, `o` visited, `.` free.
    pub fn render_plain(&self) -> String {
        let mut out = String::with_capacity(self.grid.len() + self.grid.rows());
        for r in 0..self.grid.rows() {
            if r > 0 {
                out.push('\n');
            }
            out.extend(self.row(r).map(|tile| match tile {
                Tile::Free => '.',
                Tile::Obstacle => '#',
                Tile::Start => 'S',
                Tile::Target => 'T',
                Tile::Visited => 'o',
                Tile::Path(_) => '*',
            }));
        }
        out
    }
}
