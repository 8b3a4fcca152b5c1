//! Colours and glyphs for each [`Tile`].

use gridpath_paths::Algorithm;

use crate::scene::Tile;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own colour.
    pub const DEFAULT: Self = Self(0);

    pub const BACKGROUND: Self = Self::from_rgb(18, 18, 18);
    pub const GRID: Self = Self::from_rgb(40, 40, 40);
    pub const OBSTACLE: Self = Self::from_rgb(255, 0, 0);
    pub const START: Self = Self::from_rgb(0, 255, 0);
    pub const TARGET: Self = Self::from_rgb(0, 0, 255);
    pub const VISITED: Self = Self::from_rgb(255, 255, 0);
    pub const TEXT: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// The colour a path found by `algorithm` is drawn in.
pub const fn algorithm_color(algorithm: Algorithm) -> Color {
    match algorithm {
        Algorithm::AStar => Color::from_rgb(255, 165, 0),
        Algorithm::Dijkstra => Color::from_rgb(0, 255, 255),
        Algorithm::GreedyBestFirst => Color::from_rgb(255, 192, 203),
    }
}

/// Character and foreground colour for a tile.
pub fn tile_glyph(tile: Tile) -> (char, Color) {
    match tile {
        Tile::Free => ('·', Color::GRID),
        Tile::Obstacle => ('█', Color::OBSTACLE),
        Tile::Start => ('S', Color::START),
        Tile::Target => ('T', Color::TARGET),
        Tile::Visited => ('•', Color::VISITED),
        Tile::Path(alg) => ('●', algorithm_color(alg)),
    }
}
