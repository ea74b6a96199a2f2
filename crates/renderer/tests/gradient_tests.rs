//! Tests for activity to color mapping.

use renderer::gradient::{
    color_for_activity, ease_out_expo, heat_color, heat_map_colors, Color, MappingMode,
};
use test_utils::assert_approx_eq;

fn band(threshold: u32) -> Color {
    heat_map_colors()
        .iter()
        .find(|(t, _)| *t == threshold)
        .map(|(_, color)| *color)
        .unwrap()
}

// ============================================================================
// Banded lookup
// ============================================================================

#[test]
fn test_banded_zero_and_negative_draw_nothing() {
    assert_eq!(color_for_activity(0.0), None);
    assert_eq!(color_for_activity(-4.0), None);
}

#[test]
fn test_banded_thresholds_are_exclusive() {
    // 5 is not above 5, so it stays in the 0 band.
    assert_eq!(color_for_activity(5.0), Some(band(0)));
    assert_eq!(color_for_activity(5.5), Some(band(5)));
    assert_eq!(color_for_activity(50.0), Some(band(20)));
    assert_eq!(color_for_activity(90.0), Some(band(80)));
}

#[test]
fn test_banded_high_values() {
    assert_eq!(color_for_activity(95.0), Some(band(90)));
    assert_eq!(color_for_activity(250.0), Some(band(90)));
    assert_eq!(band(90), Color::new(165, 0, 38, 255));
}

#[test]
fn test_banded_small_positive() {
    assert_eq!(color_for_activity(0.1), Some(Color::new(0, 104, 55, 255)));
}

// ============================================================================
// Continuous ramp
// ============================================================================

#[test]
fn test_ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0, 0.0, 225.0, 100.0), 0.0);
    assert_approx_eq!(ease_out_expo(100.0, 0.0, 225.0, 100.0), 225.0, 0.5);
    assert_approx_eq!(ease_out_expo(10.0, 0.0, 225.0, 100.0), 112.5, 1e-9);
}

#[test]
fn test_ease_out_expo_is_monotonic() {
    let mut previous = ease_out_expo(0.0, 0.0, 225.0, 100.0);
    for step in 1..=200 {
        let current = ease_out_expo(step as f64 * 0.5, 0.0, 225.0, 100.0);
        assert!(current > previous, "alpha fell at {}", step as f64 * 0.5);
        previous = current;
    }
}

#[test]
fn test_ease_out_expo_extrapolates() {
    assert!(ease_out_expo(-10.0, 0.0, 225.0, 100.0) < 0.0);
    assert!(ease_out_expo(150.0, 0.0, 225.0, 100.0) > ease_out_expo(100.0, 0.0, 225.0, 100.0));
}

#[test]
fn test_heat_color_lower_half_raises_red() {
    for activity in 1..=50 {
        let color = heat_color(activity as f64);
        assert_eq!(color.r, (2.55 * activity as f64).round() as u8, "red at {}", activity);
        assert_eq!(color.g, 255, "green at {}", activity);
        assert_eq!(color.b, 0);
    }
    assert_eq!(heat_color(10.0).r, 26);
    assert_eq!(heat_color(25.0).r, 64);
}

#[test]
fn test_heat_color_upper_half_lowers_green() {
    for activity in 51..=100 {
        let color = heat_color(activity as f64);
        assert_eq!(color.r, 255, "red at {}", activity);
        assert_eq!(
            color.g,
            (2.55 * (100 - activity) as f64).round() as u8,
            "green at {}",
            activity
        );
        assert_eq!(color.b, 0);
    }
    assert_eq!(heat_color(60.0).g, 102);
    assert_eq!(heat_color(75.0).g, 64);
    assert_eq!(heat_color(100.0).g, 0);
}

#[test]
fn test_heat_color_alpha() {
    assert_eq!(heat_color(30.0).a, 197);
    assert_eq!(heat_color(75.0).a, 224);
    assert_eq!(heat_color(100.0).a, 225);

    let alphas: Vec<u8> = (1..=100).map(|i| heat_color(i as f64).a).collect();
    assert!(alphas.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_heat_color_out_of_range_saturates() {
    let above = heat_color(150.0);
    assert_eq!((above.r, above.g, above.b), (255, 0, 0));
    assert_eq!(above.a, 225);

    let below = heat_color(-10.0);
    assert_eq!((below.r, below.g), (255, 255));
    assert_eq!(below.a, 0);
}

// ============================================================================
// Mapping modes
// ============================================================================

#[test]
fn test_modes_skip_zero_activity() {
    assert_eq!(MappingMode::Continuous.color_for(0.0), None);
    assert_eq!(MappingMode::Banded.color_for(0.0), None);
    assert_eq!(MappingMode::Continuous.color_for(-1.0), None);
}

#[test]
fn test_modes_dispatch_to_their_strategy() {
    assert_eq!(MappingMode::Continuous.color_for(42.0), Some(heat_color(42.0)));
    assert_eq!(MappingMode::Banded.color_for(42.0), color_for_activity(42.0));
}

#[test]
fn test_mode_serde_names() {
    assert_eq!(
        serde_json::to_string(&MappingMode::Banded).unwrap(),
        "\"banded\""
    );
    let mode: MappingMode = serde_json::from_str("\"continuous\"").unwrap();
    assert_eq!(mode, MappingMode::Continuous);
}
