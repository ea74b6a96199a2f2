//! Blending a mapped color onto a base map pixel.
//!
//! Both rules take the existing pixel as read from the untouched base map.
//! Neither is associative, so a cell must never be blended onto an already
//! blended value.

use crate::gradient::{to_channel, Color};

/// Mix weighted by the incoming color's opacity.
///
/// With `a = incoming.a / 255`, each RGB channel becomes
/// `round((existing + incoming * a) / (1 + a))`. Alpha is the larger of the
/// two alphas.
pub fn alpha_weighted_mix(existing: Color, incoming: Color) -> Color {
    let weight = f64::from(incoming.a) / 255.0;
    let mix = |old: u8, new: u8| {
        to_channel((f64::from(old) + f64::from(new) * weight) / (1.0 + weight))
    };

    Color::new(
        mix(existing.r, incoming.r),
        mix(existing.g, incoming.g),
        mix(existing.b, incoming.b),
        existing.a.max(incoming.a),
    )
}

/// Plain average of each RGB channel. Alpha is the larger of the two alphas.
pub fn simple_average(existing: Color, incoming: Color) -> Color {
    let mix = |old: u8, new: u8| to_channel((f64::from(old) + f64::from(new)) / 2.0);

    Color::new(
        mix(existing.r, incoming.r),
        mix(existing.g, incoming.g),
        mix(existing.b, incoming.b),
        existing.a.max(incoming.a),
    )
}
