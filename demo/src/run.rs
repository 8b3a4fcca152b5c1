//! Timed, sequential execution of the selected engines.

use std::time::{Duration, Instant};

use gridpath_core::{Cell, ObstacleGrid};
use gridpath_paths::{Algorithm, SearchConfig, SearchEngine, SearchOutcome};
use log::info;

/// One engine's outcome and how long the search took.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

/// Run each algorithm in turn on the same grid.
///
/// Only the search itself is timed; animation happens afterwards from the
/// returned visited logs.
pub fn run_all(
    grid: &ObstacleGrid,
    start: Cell,
    target: Cell,
    config: &SearchConfig,
    algorithms: &[Algorithm],
) -> Vec<RunResult> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let engine = algorithm.engine(config);
            let now = Instant::now();
            let outcome = engine.find_path(grid, start, target);
            let elapsed = now.elapsed();
            info!(
                "{algorithm}: {:.3} ms, visited {}, path {}",
                elapsed.as_secs_f64() * 1000.0,
                outcome.visited.len(),
                outcome.path.len()
            );
            RunResult {
                algorithm,
                outcome,
                elapsed,
            }
        })
        .collect()
}
