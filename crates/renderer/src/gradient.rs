//! Activity to color mapping.
//!
//! Two modes are supported:
//! - **Continuous**: green → yellow → red ramp whose alpha grows with an
//!   exponential ease-out, so weak activity is a faint green wash and strong
//!   activity is nearly opaque red.
//! - **Banded**: a fixed ten-step palette looked up by activity threshold.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::composite::{alpha_weighted_mix, simple_average};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

/// Round to the nearest integer and saturate into a color channel.
pub(crate) fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Banded palette: (exclusive lower threshold, color), ascending.
static HEAT_MAP_COLORS: [(u32, Color); 10] = [
    (0, Color::new(0, 104, 55, 255)),
    (5, Color::new(26, 152, 80, 255)),
    (10, Color::new(102, 189, 99, 255)),
    (15, Color::new(166, 217, 106, 255)),
    (20, Color::new(217, 239, 139, 255)),
    (50, Color::new(254, 224, 139, 255)),
    (60, Color::new(253, 174, 97, 255)),
    (70, Color::new(244, 109, 67, 255)),
    (80, Color::new(215, 48, 39, 255)),
    (90, Color::new(165, 0, 38, 255)),
];

/// The banded palette as (threshold, color) pairs in ascending order.
pub fn heat_map_colors() -> &'static [(u32, Color)] {
    &HEAT_MAP_COLORS
}

/// Color of the highest threshold strictly below `activity`.
///
/// Returns `None` for activity <= 0. Thresholds are exclusive, so an
/// activity of exactly 5 still maps to the 0 band.
pub fn color_for_activity(activity: f64) -> Option<Color> {
    if activity <= 0.0 {
        return None;
    }
    HEAT_MAP_COLORS
        .iter()
        .take_while(|(threshold, _)| activity > f64::from(*threshold))
        .last()
        .map(|(_, color)| *color)
}

/// Largest alpha the continuous ramp approaches.
pub const MAX_HEAT_ALPHA: f64 = 225.0;

/// Activity at which the continuous ramp is fully red.
pub const FULL_SCALE_ACTIVITY: f64 = 100.0;

/// Channel units per activity percent.
const CHANNEL_PER_PERCENT: f64 = 255.0 / 100.0;

/// Exponential ease-out: `c * (1 - 2^(-10 t / d)) + b`.
///
/// Not clamped; values of `t` outside `0..=d` extrapolate.
pub fn ease_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (1.0 - 2f64.powf(-10.0 * t / d)) + b
}

/// Continuous heat color for an activity in roughly `0..=100`.
///
/// Up to 50 the red channel rises with green held at 255, above 50 green
/// falls with red held at 255. Blue is always 0.
pub fn heat_color(activity: f64) -> Color {
    let alpha = ease_out_expo(activity, 0.0, MAX_HEAT_ALPHA, FULL_SCALE_ACTIVITY);

    let (red, green) = if activity > 0.0 && activity <= 50.0 {
        ((CHANNEL_PER_PERCENT * activity).round(), 255.0)
    } else {
        (
            255.0,
            (CHANNEL_PER_PERCENT * (FULL_SCALE_ACTIVITY - activity)).round(),
        )
    };

    Color::new(to_channel(red), to_channel(green), 0, to_channel(alpha))
}

/// How activity is turned into color and blended onto the base map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Palette lookup, blended by simple average.
    Banded,
    /// Green-red ramp with eased alpha, blended by alpha-weighted mix.
    #[default]
    Continuous,
}

impl MappingMode {
    /// Color for a cell, or `None` when nothing should be drawn.
    pub fn color_for(self, activity: f64) -> Option<Color> {
        if activity <= 0.0 {
            return None;
        }
        match self {
            Self::Banded => color_for_activity(activity),
            Self::Continuous => Some(heat_color(activity)),
        }
    }

    /// Blend `incoming` onto the `existing` base pixel.
    pub fn blend(self, existing: Color, incoming: Color) -> Color {
        match self {
            Self::Banded => simple_average(existing, incoming),
            Self::Continuous => alpha_weighted_mix(existing, incoming),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banded => "banded",
            Self::Continuous => "continuous",
        }
    }
}

impl FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "banded" => Ok(Self::Banded),
            "continuous" => Ok(Self::Continuous),
            other => Err(format!(
                "unknown mapping mode '{}', expected 'banded' or 'continuous'",
                other
            )),
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
