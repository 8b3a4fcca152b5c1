//! Results panel text.

use std::fmt;

use crate::run::RunResult;

/// The figures reported for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub name: &'static str,
    pub millis: f64,
    pub visited: usize,
    /// Path length in cells and its cost, if a path was found.
    pub path: Option<(usize, f64)>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:>9.3} ms  visited {:>5}  ",
            self.name, self.millis, self.visited
        )?;
        match self.path {
            Some((len, cost)) => write!(f, "path {len:>4} (cost {cost:.2})"),
            None => write!(f, "no path"),
        }
    }
}

/// Summarize each run, in run order.
pub fn summarize(results: &[RunResult]) -> Vec<Summary> {
    results
        .iter()
        .map(|r| Summary {
            name: r.algorithm.name(),
            millis: r.elapsed.as_secs_f64() * 1000.0,
            visited: r.outcome.visited.len(),
            path: r
                .outcome
                .is_found()
                .then(|| (r.outcome.path.len(), r.outcome.cost())),
        })
        .collect()
}
