//! Tests for legend rendering.

use image::Rgba;
use renderer::composite::simple_average;
use renderer::gradient::{heat_map_colors, MappingMode};
use renderer::legend::{legend_activity, render_legend, LEGEND_BACKGROUND};

#[test]
fn test_legend_activity_spans_scale() {
    assert_eq!(legend_activity(0, 100), 0.5);
    assert_eq!(legend_activity(99, 100), 99.5);
    assert_eq!(legend_activity(0, 20), 2.5);
}

#[test]
fn test_continuous_legend_runs_green_to_red() {
    let legend = render_legend(MappingMode::Continuous, 100, 8);
    assert_eq!(legend.dimensions(), (100, 8));

    let left = legend.get_pixel(0, 0);
    let right = legend.get_pixel(99, 0);
    assert!(right[0] > left[0], "red should grow to the right");
    assert!(left[1] > left[0], "low end should be green");
    assert_ne!(*left, Rgba::from(LEGEND_BACKGROUND));

    // Every row of a column is identical.
    for column in [0, 50, 99] {
        let top = legend.get_pixel(column, 0);
        assert!((1..8).all(|row| legend.get_pixel(column, row) == top));
    }
}

#[test]
fn test_banded_legend_uses_palette() {
    let legend = render_legend(MappingMode::Banded, 20, 2);
    let lowest = heat_map_colors()[0].1;
    let highest = heat_map_colors()[9].1;

    assert_eq!(
        *legend.get_pixel(0, 0),
        Rgba::from(simple_average(LEGEND_BACKGROUND, lowest))
    );
    assert_eq!(
        *legend.get_pixel(19, 1),
        Rgba::from(simple_average(LEGEND_BACKGROUND, highest))
    );
}

#[test]
fn test_empty_legend() {
    let legend = render_legend(MappingMode::Continuous, 0, 0);
    assert_eq!(legend.dimensions(), (0, 0));
}
