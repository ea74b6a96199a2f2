//! Aurora activity heatmap rendering.
//!
//! Turns an OVATION activity feed into colors and blends them onto a
//! 1024x512 world base map:
//! - `gradient`: activity to color (continuous ramp or banded palette)
//! - `composite`: blend rules
//! - `map`: the render pass, base map loaders and output writers
//! - `legend`: legend bars for the color ramps
//! - `png`: PNG encoding

pub mod composite;
pub mod error;
pub mod gradient;
pub mod legend;
pub mod map;
pub mod png;

pub use error::{RenderError, Result};
pub use gradient::{color_for_activity, heat_color, heat_map_colors, Color, MappingMode};
pub use map::{
    generate_map, BaseImageLoader, FileBaseImageLoader, FilePngWriter, ImageWriter, MapRenderer,
    PngBufferWriter, RenderSummary, Rendered,
};

/// Crate version, included in the CLI render summary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
