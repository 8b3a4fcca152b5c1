//! Search algorithms over obstacle grids.
//!
//! This crate implements three best-first strategies over the implicit graph
//! of an [`ObstacleGrid`](gridpath_core::ObstacleGrid):
//!
//! - **A\*** optimal search guided by a Euclidean heuristic ([`AStar`])
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **Greedy best-first** search, fast but not optimal ([`GreedyBestFirst`])
//!
//! Every engine answers the same question through [`SearchEngine::find_path`]
//! and returns a [`SearchOutcome`]: the path (empty if none) together with
//! the cells in the exact order they left the frontier, which is what a
//! front-end animates.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A*, greedy best-first |
//!
//! [`GridPather`] implements all three for an obstacle grid under a
//! [`Movement`] rule.

mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod greedy;
mod neighbors;
mod reconstruct;
mod search;
#[cfg(test)]
mod testing;
mod traits;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, euclidean, path_cost, step_cost};
pub use error::{ParseError, SearchError};
pub use greedy::{GreedyBestFirst, GreedyPriority};
pub use neighbors::{GridPather, Movement, neighbors};
pub use reconstruct::{PredecessorMap, reconstruct};
pub use search::{Algorithm, Engine, SearchConfig, SearchEngine, SearchOutcome};
pub use traits::{AstarPather, Pather, WeightedPather};
