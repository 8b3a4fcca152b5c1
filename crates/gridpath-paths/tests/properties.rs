//! Behaviour shared by every engine, checked over hand-made and seeded
//! random grids.

use gridpath_core::{Cell, Layout, MapGen, ObstacleGrid, SmoothingRule};
use gridpath_paths::{
    AStar, Algorithm, DIAGONAL_COST, Dijkstra, GreedyBestFirst, GreedyPriority, Movement,
    SearchConfig, SearchEngine, SearchOutcome, neighbors,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPS: f64 = 1e-9;

fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

fn engines(movement: Movement) -> Vec<Box<dyn SearchEngine>> {
    vec![
        Box::new(AStar::new().with_movement(movement)),
        Box::new(Dijkstra::new().with_movement(movement)),
        Box::new(GreedyBestFirst::new().with_movement(movement)),
        Box::new(
            GreedyBestFirst::new()
                .with_movement(movement)
                .with_priority(GreedyPriority::Heuristic),
        ),
    ]
}

fn random_grid(seed: u64, rows: usize, cols: usize, start: Cell, target: Cell) -> ObstacleGrid {
    MapGen::new(StdRng::seed_from_u64(seed)).generate(
        rows,
        cols,
        0.35,
        &[SmoothingRule {
            reps: 1,
            ..SmoothingRule::default()
        }],
        &[start, target],
    )
}

fn assert_valid_path(
    grid: &ObstacleGrid,
    movement: Movement,
    out: &SearchOutcome,
    start: Cell,
    target: Cell,
) {
    if out.path.is_empty() {
        return;
    }
    assert_eq!(out.path[0], start);
    assert_eq!(*out.path.last().unwrap(), target);
    for p in &out.path {
        assert!(grid.is_free(*p), "path crosses obstacle at {p}");
    }
    for w in out.path.windows(2) {
        assert!(
            neighbors(grid, w[0], movement).contains(&w[1]),
            "{} -> {} is not a legal move",
            w[0],
            w[1]
        );
    }
}

#[test]
fn open_grid_optimality() {
    let grid = ObstacleGrid::new(5, 5);
    let (start, target) = (c(0, 0), c(4, 4));
    for alg in [Algorithm::AStar, Algorithm::Dijkstra] {
        let out = alg.engine(&SearchConfig::default()).find_path(&grid, start, target);
        assert_eq!(out.path.len(), 5, "{alg}");
        assert!((out.cost() - 4.0 * DIAGONAL_COST).abs() < EPS, "{alg}");
    }
    let out = GreedyBestFirst::new().find_path(&grid, start, target);
    assert_eq!(out.path.first(), Some(&start));
    assert_eq!(out.path.last(), Some(&target));
    assert!(out.cost() >= 4.0 * DIAGONAL_COST - EPS);
}

#[test]
fn full_width_wall_means_no_path() {
    let l = Layout::parse(
        "\
S......
.......
#######
.......
......T",
    )
    .unwrap();
    let (start, target) = (l.start.unwrap(), l.target.unwrap());
    for movement in [Movement::Four, Movement::Eight] {
        for engine in engines(movement) {
            let out = engine.find_path(&l.grid, start, target);
            assert!(out.path.is_empty());
            let mut explored = out.visited.clone();
            explored.sort();
            explored.dedup();
            assert_eq!(explored.len(), 14, "{}", engine.algorithm());
            assert!(explored.iter().all(|p| p.row < 2));
        }
    }
}

#[test]
fn search_is_deterministic() {
    let (start, target) = (c(0, 0), c(19, 29));
    let grid = random_grid(11, 20, 30, start, target);
    for engine in engines(Movement::Eight) {
        let first = engine.find_path(&grid, start, target);
        let second = engine.find_path(&grid, start, target);
        assert_eq!(first, second, "{}", engine.algorithm());
    }
}

#[test]
fn paths_are_valid_on_random_grids() {
    for seed in 0..20 {
        let (start, target) = (c(1, 1), c(23, 37));
        let grid = random_grid(seed, 25, 40, start, target);
        for movement in [Movement::Four, Movement::Eight] {
            for engine in engines(movement) {
                let out = engine.find_path(&grid, start, target);
                assert_valid_path(&grid, movement, &out, start, target);
                assert!(!out.visited.contains(&target));
                assert!(out.visited.iter().all(|p| grid.is_free(*p)));
            }
        }
    }
}

#[test]
fn engines_agree_on_reachability_and_astar_is_optimal() {
    for seed in 100..120 {
        let (start, target) = (c(0, 0), c(29, 29));
        let grid = random_grid(seed, 30, 30, start, target);
        let config = SearchConfig::default();
        let astar = Algorithm::AStar.engine(&config).find_path(&grid, start, target);
        let dijkstra = Algorithm::Dijkstra.engine(&config).find_path(&grid, start, target);
        let greedy = Algorithm::GreedyBestFirst
            .engine(&config)
            .find_path(&grid, start, target);

        assert_eq!(astar.is_found(), dijkstra.is_found(), "seed {seed}");
        assert_eq!(astar.is_found(), greedy.is_found(), "seed {seed}");
        if astar.is_found() {
            assert!((astar.cost() - dijkstra.cost()).abs() < EPS, "seed {seed}");
            assert!(greedy.cost() >= astar.cost() - EPS, "seed {seed}");
        }
    }
}

#[test]
fn dijkstra_never_logs_a_cell_twice() {
    for seed in 200..210 {
        let (start, target) = (c(0, 0), c(24, 24));
        let grid = random_grid(seed, 25, 25, start, target);
        let out = Dijkstra::new().find_path(&grid, start, target);
        let mut seen = out.visited.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), out.visited.len(), "seed {seed}");
    }
}

#[test]
fn corner_cutting_is_never_used() {
    let l = Layout::parse(
        "\
S#...
#....
....T",
    )
    .unwrap();
    let (start, target) = (l.start.unwrap(), l.target.unwrap());
    assert!(!neighbors(&l.grid, start, Movement::Eight).contains(&c(1, 1)));
    for engine in engines(Movement::Eight) {
        let out = engine.find_path(&l.grid, start, target);
        assert!(out.path.is_empty(), "{}", engine.algorithm());
        assert_eq!(out.visited, vec![start]);
    }
}

#[test]
fn swapping_endpoints_keeps_path_length() {
    let grid = ObstacleGrid::new(8, 12);
    let pairs = [(c(0, 0), c(7, 11)), (c(2, 9), c(6, 1)), (c(0, 5), c(7, 5))];
    for (a, b) in pairs {
        for engine in engines(Movement::Eight).into_iter().take(3) {
            let forward = engine.find_path(&grid, a, b);
            let backward = engine.find_path(&grid, b, a);
            assert_eq!(forward.path.len(), backward.path.len(), "{}", engine.algorithm());
        }
    }
}
