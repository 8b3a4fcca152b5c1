//! Animated replay of finished searches.

use std::io;
use std::thread;
use std::time::Duration;

use gridpath_core::Cell;
use gridpath_term::{Color, Key, Scene, Terminal, algorithm_color, offset};

use crate::config::Setup;
use crate::report::summarize;
use crate::run::RunResult;

/// Animation pacing.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub delay: Duration,
    /// Visited cells shown one frame each; the rest appear at once.
    pub max_animated: usize,
}

/// Whether the user asked to leave early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a visited log into the cells revealed one by one and the
/// remainder revealed in a single frame.
pub fn split_animated(visited: &[Cell], max_animated: usize) -> (&[Cell], &[Cell]) {
    visited.split_at(visited.len().min(max_animated))
}

/// Replay each result's visited log, then overlay every path and show the
/// results panel until a key is pressed.
pub fn animate(setup: &Setup, results: &[RunResult], pacing: Pacing) -> io::Result<()> {
    let mut term = Terminal::open()?;
    let mut scene = Scene::new(&setup.grid, Some(setup.start), Some(setup.target));
    let panel_x = offset(2, setup.grid.cols() * 2)?;

    for result in results {
        scene.clear_visited();
        let title = format!("{}: exploring", result.algorithm);
        term.draw_text(panel_x, 0, &[(title, algorithm_color(result.algorithm))])?;

        if replay(&mut term, &mut scene, &result.outcome.visited, pacing)? == Flow::Quit {
            return Ok(());
        }
        scene.set_path(result.algorithm, &result.outcome.path);
        term.draw_scene(&scene, 0, 0)?;
    }

    // Paths stay; exploration of the last run does not.
    scene.clear_visited();
    term.draw_scene(&scene, 0, 0)?;

    let mut lines = vec![("Results".to_string(), Color::TEXT)];
    lines.extend(
        summarize(results)
            .into_iter()
            .zip(results)
            .map(|(s, r)| (s.to_string(), algorithm_color(r.algorithm))),
    );
    lines.push((String::new(), Color::TEXT));
    lines.push(("press any key to exit".to_string(), Color::GRID));
    term.draw_text(panel_x, 0, &lines)?;
    term.wait_key()?;
    Ok(())
}

fn replay(
    term: &mut Terminal,
    scene: &mut Scene<'_>,
    visited: &[Cell],
    pacing: Pacing,
) -> io::Result<Flow> {
    let (animated, rest) = split_animated(visited, pacing.max_animated);
    let mut skipped = false;
    for &cell in animated {
        scene.mark_visited(cell);
        if skipped {
            continue;
        }
        term.draw_scene(scene, 0, 0)?;
        match term.poll_key()? {
            Some(Key::Quit) => return Ok(Flow::Quit),
            Some(Key::Skip) => skipped = true,
            _ => thread::sleep(pacing.delay),
        }
    }
    for &cell in rest {
        scene.mark_visited(cell);
    }
    term.draw_scene(scene, 0, 0)?;
    Ok(Flow::Continue)
}
