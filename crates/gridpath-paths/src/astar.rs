use std::collections::HashMap;

use gridpath_core::Cell;
use log::trace;

use crate::frontier::Frontier;
use crate::neighbors::{GridPather, Movement};
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::search::{Algorithm, SearchEngine, SearchOutcome};
use crate::traits::AstarPather;

/// A* search: expands cells in order of `f = g + h`, where `g` is the cost
/// from the start and `h` the Euclidean estimate to the target.
///
/// Optimal for the 1 / √2 step costs of [`GridPather`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStar {
    movement: Movement,
}

impl AStar {
    /// Create an engine using 8-way movement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement rule (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }
}

impl SearchEngine for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn movement(&self) -> Movement {
        self.movement
    }

    fn search(&self, pather: &GridPather<'_>, start: Cell, target: Cell) -> SearchOutcome {
        astar(pather, start, target)
    }
}

/// Run A* over any [`AstarPather`].
///
/// Every popped cell other than the target is logged, stale duplicates
/// included; a duplicate is recognised by its `f` exceeding the cell's
/// current best and is not expanded again.
pub(crate) fn astar<P: AstarPather>(pather: &P, start: Cell, target: Cell) -> SearchOutcome {
    let mut visited = Vec::new();
    let mut preds = PredecessorMap::new();
    let mut g_score: HashMap<Cell, f64> = HashMap::new();
    let mut open = Frontier::new();

    g_score.insert(start, 0.0);
    open.push(start, pather.estimate(start, target));

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.cell;
        if ci == target {
            trace!("A*: reached {target}, {} entries left", open.len());
            return SearchOutcome::found(reconstruct(&preds, target), visited);
        }
        visited.push(ci);

        let Some(&current_g) = g_score.get(&ci) else {
            continue;
        };
        if current.priority > current_g + pather.estimate(ci, target) {
            trace!("A*: stale entry for {ci}");
            continue;
        }

        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &np in &nbuf {
            let tentative_g = current_g + pather.cost(ci, np);
            if g_score.get(&np).is_some_and(|&g| tentative_g >= g) {
                continue;
            }
            g_score.insert(np, tentative_g);
            preds.insert(np, ci);
            open.push(np, tentative_g + pather.estimate(np, target));
        }
    }

    SearchOutcome::exhausted(visited)
}
