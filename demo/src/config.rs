//! Command-line configuration.

use std::fmt;

use clap::Parser;
use gridpath_core::{Cell, GridError, Layout, MapGen, ObstacleGrid, SmoothingRule};
use gridpath_paths::{Algorithm, GreedyPriority, Movement, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Compare A*, Dijkstra and greedy best-first search on a grid.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct DemoConfig {
    /// Number of grid rows
    #[arg(long, default_value_t = 40)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 40)]
    pub cols: usize,

    /// Fraction of cells scattered as obstacles (0.0-1.0)
    #[arg(short, long, default_value_t = 0.3)]
    pub density: f64,

    /// Cellular automata smoothing passes applied after scattering
    #[arg(long, default_value_t = 0)]
    pub smooth: usize,

    /// RNG seed; a random one is chosen and logged if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// ASCII layout to use instead of a generated grid
    /// ('.' free, '#' obstacle, 'S' start, 'T' target, rows separated by '/' or newlines)
    #[arg(long, conflicts_with_all = ["rows", "cols", "density", "smooth", "seed"])]
    pub layout: Option<String>,

    /// Start cell as "row,col" (defaults to the top-left corner)
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Cell>,

    /// Target cell as "row,col" (defaults to the bottom-right corner)
    #[arg(long, value_parser = parse_cell)]
    pub target: Option<Cell>,

    /// Algorithms to run, comma separated (astar, dijkstra, greedy)
    #[arg(short, long, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    pub algorithms: Vec<Algorithm>,

    /// Movement rule: 4 or 8
    #[arg(short, long, default_value_t = Movement::Eight)]
    pub movement: Movement,

    /// Greedy frontier priority: h or h+g
    #[arg(long, default_value_t = GreedyPriority::HeuristicPlusCost)]
    pub greedy_priority: GreedyPriority,

    /// Print the results as text instead of animating them
    #[arg(long)]
    pub no_animate: bool,

    /// Delay between animation frames, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Maximum number of visited cells animated per algorithm
    #[arg(long, default_value_t = 1000)]
    pub max_animated: usize,
}

/// Largest grid side the terminal renderer accepts.
pub const MAX_SIDE: usize = 1000;

/// Parse `"row,col"` into a [`Cell`].
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \u{201c}{s}\u{201d}"))?;
    let row = r
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad row \u{201c}{r}\u{201d}: {e}"))?;
    let col = c
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad column \u{201c}{c}\u{201d}: {e}"))?;
    Ok(Cell::new(row, col))
}

/// Configuration rejected before any search runs.
#[derive(Debug)]
pub enum ConfigError {
    /// Zero rows or columns.
    EmptyGrid,
    /// More than [`MAX_SIDE`] rows or columns.
    TooLarge { rows: usize, cols: usize },
    /// Density outside 0.0–1.0.
    Density(f64),
    /// The layout could not be parsed.
    Layout(GridError),
    /// An endpoint is outside the grid.
    Endpoint { name: &'static str, err: GridError },
    /// The start cell is an obstacle.
    StartBlocked(Cell),
    /// No algorithm selected.
    NoAlgorithms,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and column"),
            Self::TooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} grid exceeds {MAX_SIDE} cells per side")
            }
            Self::Density(d) => write!(f, "density {d} is outside 0.0-1.0"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::Endpoint { name, err } => write!(f, "{name}: {err}"),
            Self::StartBlocked(c) => write!(f, "start {c} is an obstacle"),
            Self::NoAlgorithms => write!(f, "select at least one algorithm"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) | Self::Endpoint { err: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// A grid with its endpoints, ready to search.
#[derive(Debug, Clone)]
pub struct Setup {
    pub grid: ObstacleGrid,
    pub start: Cell,
    pub target: Cell,
    /// Seed the grid was generated from, if it was generated.
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Engine settings chosen on the command line.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            movement: self.movement,
            greedy_priority: self.greedy_priority,
        }
    }

    /// Selected algorithms in display order, without duplicates.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        let mut algs = self.algorithms.clone();
        algs.sort();
        algs.dedup();
        algs
    }

    /// Validate the configuration and build the grid to search.
    ///
    /// The start must be free. An occupied target is accepted: every engine
    /// then reports no path without searching.
    pub fn setup(&self) -> Result<Setup, ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }

        let (grid, marked_start, marked_target) = match &self.layout {
            Some(text) => {
                let l = Layout::parse(&text.replace('/', "\n")).map_err(ConfigError::Layout)?;
                (Some(l.grid), l.start, l.target)
            }
            None => {
                if self.rows == 0 || self.cols == 0 {
                    return Err(ConfigError::EmptyGrid);
                }
                if !(0.0..=1.0).contains(&self.density) {
                    return Err(ConfigError::Density(self.density));
                }
                (None, None, None)
            }
        };
        let (rows, cols) = grid
            .as_ref()
            .map_or((self.rows, self.cols), |g| (g.rows(), g.cols()));
        if rows > MAX_SIDE || cols > MAX_SIDE {
            return Err(ConfigError::TooLarge { rows, cols });
        }

        let start = self.start.or(marked_start).unwrap_or_default();
        let target = self
            .target
            .or(marked_target)
            .unwrap_or(Cell::new(rows - 1, cols - 1));
        for (name, cell) in [("start", start), ("target", target)] {
            if cell.row >= rows || cell.col >= cols {
                let err = GridError::OutOfBounds { cell, rows, cols };
                return Err(ConfigError::Endpoint { name, err });
            }
        }

        let (grid, seed) = match grid {
            Some(grid) => (grid, None),
            None => {
                let seed = self.seed.unwrap_or_else(rand::random);
                let rules: Vec<SmoothingRule> = if self.smooth == 0 {
                    Vec::new()
                } else {
                    vec![SmoothingRule {
                        reps: self.smooth,
                        ..SmoothingRule::default()
                    }]
                };
                let grid = MapGen::new(StdRng::seed_from_u64(seed)).generate(
                    rows,
                    cols,
                    self.density,
                    &rules,
                    &[start, target],
                );
                (grid, Some(seed))
            }
        };

        if !grid.is_free(start) {
            return Err(ConfigError::StartBlocked(start));
        }

        Ok(Setup {
            grid,
            start,
            target,
            seed,
        })
    }
}
