//! Terminal demonstrator comparing gridpath's search engines.
//!
//! The binary generates (or parses) a grid, runs each selected algorithm to
//! completion while timing it, then replays every visited log on screen
//! followed by the paths and a results panel.

pub mod config;
pub mod report;
pub mod run;
pub mod visualize;

pub use config::{ConfigError, DemoConfig, Setup};
pub use report::{Summary, summarize};
pub use run::{RunResult, run_all};
