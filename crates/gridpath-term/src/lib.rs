//! Terminal rendering for gridpath.
//!
//! A [`Scene`] composes an obstacle grid, its endpoints, the cells revealed
//! so far and any finished paths into one [`Tile`] per cell. A
//! [`Terminal`] draws scenes through crossterm; [`Scene::render_plain`]
//! produces the same picture as uncoloured text.

pub mod scene;
pub mod style;
pub mod terminal;

pub use scene::{Scene, Tile};
pub use style::{Color, algorithm_color, tile_glyph};
pub use terminal::{Key, Terminal, offset};
