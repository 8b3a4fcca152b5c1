use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use gridpath_core::Cell;
use log::trace;

use crate::error::ParseError;
use crate::frontier::Frontier;
use crate::neighbors::{GridPather, Movement};
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::search::{Algorithm, SearchEngine, SearchOutcome};
use crate::traits::AstarPather;

/// How greedy best-first search ranks its frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyPriority {
    /// Estimated distance to the target only.
    Heuristic,
    /// Estimated distance plus the cost paid so far, which damps the
    /// long detours pure greedy search is prone to.
    #[default]
    HeuristicPlusCost,
}

impl fmt::Display for GreedyPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heuristic => write!(f, "h"),
            Self::HeuristicPlusCost => write!(f, "h+g"),
        }
    }
}

impl FromStr for GreedyPriority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "heuristic" => Ok(Self::Heuristic),
            "h+g" | "g+h" | "heuristic+cost" | "cost" => Ok(Self::HeuristicPlusCost),
            _ => Err(ParseError::new("greedy priority", s)),
        }
    }
}

/// Greedy best-first search: always expands the frontier cell that looks
/// closest to the target. Each cell is expanded at most once, so the path
/// found need not be the shortest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyBestFirst {
    movement: Movement,
    priority: GreedyPriority,
}

impl GreedyBestFirst {
    /// Create an engine using 8-way movement and `h + g` priority.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement rule (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Set the frontier priority (builder).
    pub fn with_priority(mut self, priority: GreedyPriority) -> Self {
        self.priority = priority;
        self
    }

    /// The frontier priority in use.
    pub fn priority(&self) -> GreedyPriority {
        self.priority
    }
}

impl SearchEngine for GreedyBestFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::GreedyBestFirst
    }

    fn movement(&self) -> Movement {
        self.movement
    }

    fn search(&self, pather: &GridPather<'_>, start: Cell, target: Cell) -> SearchOutcome {
        greedy(pather, start, target, self.priority)
    }
}

/// Run greedy best-first search over any [`AstarPather`].
///
/// The expansion gate is membership in the visited log: once a cell has
/// been expanded it is never reopened, and later frontier entries for it
/// are dropped unlogged.
pub(crate) fn greedy<P: AstarPather>(
    pather: &P,
    start: Cell,
    target: Cell,
    priority: GreedyPriority,
) -> SearchOutcome {
    let rank = |c: Cell, g: f64| match priority {
        GreedyPriority::Heuristic => pather.estimate(c, target),
        GreedyPriority::HeuristicPlusCost => pather.estimate(c, target) + g,
    };

    let mut visited = Vec::new();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut preds = PredecessorMap::new();
    let mut g_score: HashMap<Cell, f64> = HashMap::new();
    let mut open = Frontier::new();

    g_score.insert(start, 0.0);
    open.push(start, rank(start, 0.0));

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.cell;
        if closed.contains(&ci) {
            trace!("Greedy: {ci} already expanded");
            continue;
        }
        if ci == target {
            trace!("Greedy: reached {target}, {} entries left", open.len());
            return SearchOutcome::found(reconstruct(&preds, target), visited);
        }
        visited.push(ci);
        closed.insert(ci);

        let current_g = g_score.get(&ci).copied().unwrap_or(0.0);

        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &np in &nbuf {
            if closed.contains(&np) {
                continue;
            }
            let tentative_g = current_g + pather.cost(ci, np);
            if g_score.get(&np).is_some_and(|&g| tentative_g >= g) {
                continue;
            }
            g_score.insert(np, tentative_g);
            preds.insert(np, ci);
            open.push(np, rank(np, tentative_g));
        }
    }

    SearchOutcome::exhausted(visited)
}
