//! **gridpath-core**: grid model for the gridpath search demonstrator.
//!
//! This crate provides the foundational types shared by the search engines
//! and the terminal front-end: the [`Cell`] coordinate, the [`ObstacleGrid`]
//! occupancy mask, ASCII [`Layout`] parsing, and seeded obstacle generation
//! through [`MapGen`].

pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod mapgen;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{FREE, OBSTACLE, ObstacleGrid};
pub use layout::Layout;
pub use mapgen::{MapGen, SmoothingRule, smooth};
