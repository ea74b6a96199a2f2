//! Base map images for renderer tests.

use aurora_common::MapSize;
use image::{Rgba, RgbaImage};

/// Opaque black.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Mid-grey ocean-like base color.
pub const OCEAN: [u8; 4] = [100, 100, 100, 255];

/// An image of the given size filled with one color.
pub fn solid_base_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Opaque black base map of the required 1024x512 size.
pub fn black_base_map() -> RgbaImage {
    let size = MapSize::REQUIRED;
    solid_base_image(size.width, size.height, BLACK)
}

/// Base map of the required size with a horizontal grey ramp, so every
/// column has a distinct color.
pub fn ramp_base_map() -> RgbaImage {
    let size = MapSize::REQUIRED;
    RgbaImage::from_fn(size.width, size.height, |x, y| {
        Rgba([(x / 4) as u8, (y / 2) as u8, 128, 255])
    })
}
