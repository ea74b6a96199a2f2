//! Fixed map geometry shared by the parser and the renderer.

use std::fmt;

/// Number of latitude bands kept from an activity feed.
pub const MAX_LATITUDE_BANDS: usize = 512;

/// Pixel dimensions of a map image.
///
/// Columns are longitude bins and rows are latitude bands, one pixel each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl MapSize {
    /// The only size the base map and output image may have.
    pub const REQUIRED: MapSize = MapSize {
        width: 1024,
        height: 512,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether an image of `width` x `height` has exactly this size.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Whether the cell at (`column`, `row`) falls inside the image.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.width as usize && row < self.height as usize
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
