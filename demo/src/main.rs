use std::time::Duration;

use clap::Parser;
use gridpath_demo::visualize::{self, Pacing};
use gridpath_demo::{DemoConfig, run_all, summarize};
use gridpath_term::Scene;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::parse();
    let setup = config.setup()?;
    if let Some(seed) = setup.seed {
        info!("seed {seed}");
    }
    info!(
        "{}x{} grid, {} obstacles, {} -> {}",
        setup.grid.rows(),
        setup.grid.cols(),
        setup.grid.count_obstacles(),
        setup.start,
        setup.target
    );

    let results = run_all(
        &setup.grid,
        setup.start,
        setup.target,
        &config.search_config(),
        &config.selected_algorithms(),
    );

    if config.no_animate {
        let mut scene = Scene::new(&setup.grid, Some(setup.start), Some(setup.target));
        for r in &results {
            scene.set_path(r.algorithm, &r.outcome.path);
        }
        println!("{}", scene.render_plain());
        for s in summarize(&results) {
            println!("{s}");
        }
        return Ok(());
    }

    visualize::animate(
        &setup,
        &results,
        Pacing {
            delay: Duration::from_millis(config.delay_ms),
            max_animated: config.max_animated,
        },
    )?;
    Ok(())
}
