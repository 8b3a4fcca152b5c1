use std::fmt;
use std::str::FromStr;

use gridpath_core::{Cell, ObstacleGrid};
use log::debug;

use crate::astar::AStar;
use crate::dijkstra::Dijkstra;
use crate::distance::path_cost;
use crate::error::{ParseError, SearchError};
use crate::greedy::{GreedyBestFirst, GreedyPriority};
use crate::neighbors::{GridPather, Movement};

/// The result of one search: the path found and the cells expanded.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells from start to target inclusive, or empty if the target could
    /// not be reached.
    pub path: Vec<Cell>,
    /// Cells in the exact order they were popped from the frontier.
    pub visited: Vec<Cell>,
}

impl SearchOutcome {
    pub(crate) fn found(path: Vec<Cell>, visited: Vec<Cell>) -> Self {
        Self { path, visited }
    }

    pub(crate) fn exhausted(visited: Vec<Cell>) -> Self {
        Self {
            path: Vec::new(),
            visited,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Total step cost of the path (0 if none).
    pub fn cost(&self) -> f64 {
        path_cost(&self.path)
    }

    /// Split into `(path, visited)`.
    pub fn into_parts(self) -> (Vec<Cell>, Vec<Cell>) {
        (self.path, self.visited)
    }
}

/// Common interface of the search engines.
///
/// Engines hold only configuration; all search state is created inside
/// [`find_path`](Self::find_path) and dropped on return, so one engine can
/// be reused for any number of independent queries.
pub trait SearchEngine {
    /// Which algorithm this engine runs.
    fn algorithm(&self) -> Algorithm;

    /// The movement rule used for neighbor generation.
    fn movement(&self) -> Movement;

    /// Run the search on a grid adapter. `target` is known to be free.
    fn search(&self, pather: &GridPather<'_>, start: Cell, target: Cell) -> SearchOutcome;

    /// Find a path from `start` to `target`.
    ///
    /// Returns an empty outcome without searching if `target` is not free.
    /// `start` is trusted to be free; use
    /// [`try_find_path`](Self::try_find_path) to have it checked.
    fn find_path(&self, grid: &ObstacleGrid, start: Cell, target: Cell) -> SearchOutcome {
        let algorithm = self.algorithm();
        if !grid.is_free(target) {
            debug!("{algorithm}: target {target} is not free, skipping search");
            return SearchOutcome::default();
        }
        let outcome = self.search(&GridPather::new(grid, self.movement()), start, target);
        debug!(
            "{algorithm}: {start} -> {target}: visited {}, path {}",
            outcome.visited.len(),
            outcome.path.len()
        );
        outcome
    }

    /// Like [`find_path`](Self::find_path), but reject out-of-bounds
    /// endpoints and a blocked start instead of trusting the caller.
    fn try_find_path(
        &self,
        grid: &ObstacleGrid,
        start: Cell,
        target: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        grid.check_bounds(start).map_err(SearchError::StartOutOfBounds)?;
        grid.check_bounds(target).map_err(SearchError::TargetOutOfBounds)?;
        if !grid.is_free(start) {
            return Err(SearchError::StartBlocked(start));
        }
        Ok(self.find_path(grid, start, target))
    }
}

/// Engine settings shared by every algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub movement: Movement,
    pub greedy_priority: GreedyPriority,
}

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    GreedyBestFirst,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 3] = [Self::AStar, Self::Dijkstra, Self::GreedyBestFirst];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::GreedyBestFirst => "Greedy BFS",
        }
    }

    /// Build an engine for this algorithm.
    pub fn engine(self, config: &SearchConfig) -> Engine {
        match self {
            Self::AStar => Engine::AStar(AStar::new().with_movement(config.movement)),
            Self::Dijkstra => Engine::Dijkstra(Dijkstra::new().with_movement(config.movement)),
            Self::GreedyBestFirst => Engine::GreedyBestFirst(
                GreedyBestFirst::new()
                    .with_movement(config.movement)
                    .with_priority(config.greedy_priority),
            ),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "greedy" | "greedy-bfs" | "greedy bfs" | "gbfs" | "best-first" => {
                Ok(Self::GreedyBestFirst)
            }
            _ => Err(ParseError::new("algorithm", s)),
        }
    }
}

/// A configured engine for any [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    AStar(AStar),
    Dijkstra(Dijkstra),
    GreedyBestFirst(GreedyBestFirst),
}

impl SearchEngine for Engine {
    fn algorithm(&self) -> Algorithm {
        match self {
            Self::AStar(e) => e.algorithm(),
            Self::Dijkstra(e) => e.algorithm(),
            Self::GreedyBestFirst(e) => e.algorithm(),
        }
    }

    fn movement(&self) -> Movement {
        match self {
            Self::AStar(e) => e.movement(),
            Self::Dijkstra(e) => e.movement(),
            Self::GreedyBestFirst(e) => e.movement(),
        }
    }

    fn search(&self, pather: &GridPather<'_>, start: Cell, target: Cell) -> SearchOutcome {
        match self {
            Self::AStar(e) => e.search(pather, start, target),
            Self::Dijkstra(e) => e.search(pather, start, target),
            Self::GreedyBestFirst(e) => e.search(pather, start, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::GridError;

    #[test]
    fn algorithm_names_parse_back() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
        }
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("greedy".parse::<Algorithm>(), Ok(Algorithm::GreedyBestFirst));
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn engine_reports_its_configuration() {
        let config = SearchConfig {
            movement: Movement::Four,
            greedy_priority: GreedyPriority::Heuristic,
        };
        for alg in Algorithm::ALL {
            let engine = alg.engine(&config);
            assert_eq!(engine.algorithm(), alg);
            assert_eq!(engine.movement(), Movement::Four);
        }
        assert_eq!(
            Algorithm::GreedyBestFirst.engine(&config),
            Engine::GreedyBestFirst(
                GreedyBestFirst::new()
                    .with_movement(Movement::Four)
                    .with_priority(GreedyPriority::Heuristic)
            )
        );
        let Engine::GreedyBestFirst(greedy) = Algorithm::GreedyBestFirst.engine(&config) else {
            panic!("greedy algorithm built a different engine");
        };
        assert_eq!(greedy.priority(), GreedyPriority::Heuristic);
        let Engine::GreedyBestFirst(greedy) =
            Algorithm::GreedyBestFirst.engine(&SearchConfig::default())
        else {
            panic!("greedy algorithm built a different engine");
        };
        assert_eq!(greedy.priority(), GreedyPriority::HeuristicPlusCost);
    }

    #[test]
    fn occupied_target_is_never_searched() {
        let mut grid = ObstacleGrid::new(4, 4);
        let target = Cell::new(3, 3);
        grid.set_blocked(target, true).unwrap();
        for alg in Algorithm::ALL {
            let outcome = alg
                .engine(&SearchConfig::default())
                .find_path(&grid, Cell::new(0, 0), target);
            assert_eq!(outcome, SearchOutcome::default());
        }
    }

    #[test]
    fn out_of_bounds_target_is_never_searched() {
        let grid = ObstacleGrid::new(4, 4);
        let outcome = AStar::new().find_path(&grid, Cell::new(0, 0), Cell::new(9, 9));
        assert!(outcome.path.is_empty());
        assert!(outcome.visited.is_empty());
    }

    #[test]
    fn try_find_path_validates_endpoints() {
        let mut grid = ObstacleGrid::new(3, 3);
        let engine = Dijkstra::new();
        assert_eq!(
            engine.try_find_path(&grid, Cell::new(3, 0), Cell::new(0, 0)),
            Err(SearchError::StartOutOfBounds(GridError::OutOfBounds {
                cell: Cell::new(3, 0),
                rows: 3,
                cols: 3
            }))
        );
        assert!(matches!(
            engine.try_find_path(&grid, Cell::new(0, 0), Cell::new(0, 3)),
            Err(SearchError::TargetOutOfBounds(_))
        ));
        grid.set_blocked(Cell::new(1, 1), true).unwrap();
        assert_eq!(
            engine.try_find_path(&grid, Cell::new(1, 1), Cell::new(0, 0)),
            Err(SearchError::StartBlocked(Cell::new(1, 1)))
        );
        let outcome = engine
            .try_find_path(&grid, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert!(outcome.is_found());
    }

    #[test]
    fn outcome_helpers() {
        let outcome = SearchOutcome::found(
            vec![Cell::new(0, 0), Cell::new(0, 1)],
            vec![Cell::new(0, 0)],
        );
        assert!(outcome.is_found());
        assert_eq!(outcome.cost(), 1.0);
        let (path, visited) = outcome.into_parts();
        assert_eq!(path.len(), 2);
        assert_eq!(visited, vec![Cell::new(0, 0)]);
        assert!(!SearchOutcome::exhausted(Vec::new()).is_found());
    }
}
