//! Color ramp legends.

use image::RgbaImage;

use crate::gradient::{Color, MappingMode};

/// Background the legend ramp is blended onto.
pub const LEGEND_BACKGROUND: Color = Color::new(0, 0, 0, 255);

/// Activity shown by legend column `column` of a legend `width` pixels wide.
pub fn legend_activity(column: u32, width: u32) -> f64 {
    100.0 * (f64::from(column) + 0.5) / f64::from(width)
}

/// Horizontal legend bar for `mode`, low activity on the left.
///
/// Each column is the mode's color blended onto an opaque black background,
/// the same way cells are blended onto the base map.
pub fn render_legend(mode: MappingMode, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, LEGEND_BACKGROUND.into());

    for column in 0..width {
        let Some(color) = mode.color_for(legend_activity(column, width)) else {
            continue;
        };
        let pixel: image::Rgba<u8> = mode.blend(LEGEND_BACKGROUND, color).into();
        for row in 0..height {
            image.put_pixel(column, row, pixel);
        }
    }

    image
}
