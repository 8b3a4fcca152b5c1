use std::collections::HashMap;

use gridpath_core::Cell;
use log::trace;

use crate::frontier::Frontier;
use crate::neighbors::{GridPather, Movement};
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::search::{Algorithm, SearchEngine, SearchOutcome};
use crate::traits::WeightedPather;

/// Dijkstra's uniform-cost search: expands cells in order of their distance
/// from the start, with no estimate of what lies ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra {
    movement: Movement,
}

impl Dijkstra {
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

impl SearchEngine for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn movement(&self) -> Movement {
        self.movement
    }

    fn search(&self, pather: &GridPather<'_>, start: Cell, target: Cell) -> SearchOutcome {
        dijkstra(pather, start, target)
    }
}

/// Run Dijkstra over any [`WeightedPather`].
///
/// A cell missing from the distance map is at infinite distance. A popped
/// entry whose distance exceeds the recorded best is stale: it is dropped
/// without being logged or expanded.
pub(crate) fn dijkstra<P: WeightedPather>(pather: &P, start: Cell, target: Cell) -> SearchOutcome {
    let mut visited = Vec::new();
    let mut preds = PredecessorMap::new();
    let mut dist: HashMap<Cell, f64> = HashMap::new();
    let mut open = Frontier::new();

    dist.insert(start, 0.0);
    open.push(start, 0.0);

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.cell;
        let current_d = current.priority;
        if dist.get(&ci).is_some_and(|&d| current_d > d) {
            trace!("Dijkstra: stale entry for {ci}");
            continue;
        }
        if ci == target {
            trace!("Dijkstra: reached {target}, {} entries left", open.len());
            return SearchOutcome::found(reconstruct(&preds, target), visited);
        }
        visited.push(ci);

        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &np in &nbuf {
            let tentative = current_d + pather.cost(ci, np);
            if dist.get(&np).is_some_and(|&d| tentative >= d) {
                continue;
            }
            dist.insert(np, tentative);
            preds.insert(np, ci);
            open.push(np, tentative);
        }
    }

    SearchOutcome::exhausted(visited)
}
