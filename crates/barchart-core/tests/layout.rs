// File: crates/barchart-core/tests/layout.rs
// Purpose: Bar geometry: scaling, offsets, degenerate inputs.

use barchart_core::types::Padding;
use barchart_core::{layout, parse, LayoutOptions, Series};

fn opts(width: f64, height: f64) -> LayoutOptions {
    LayoutOptions { width, height, padding: Padding::new(10.0, 20.0, 5.0), bar_spacing: 2.0 }
}

#[test]
fn scales_to_plot_height() {
    let s = parse("10,20,40", "a,b,c").unwrap();
    let g = layout(&s, &opts(100.0, 230.0));
    assert_eq!(g.max_value, 40.0);
    assert_eq!(g.scale, 200.0 / 40.0);
    assert_eq!(g.bar_heights, vec![50.0, 100.0, 200.0]);
    assert_eq!(g.baseline, 210.0);
}

#[test]
fn offsets_advance_by_width_plus_spacing() {
    let s = parse("1,1,1,1", "a,b,c,d").unwrap();
    let g = layout(&s, &opts(108.0, 100.0));
    // (108 - 2*5 - 3*2) / 4
    assert_eq!(g.bar_width, 23.0);
    assert_eq!(g.x_offsets, vec![5.0, 30.0, 55.0, 80.0]);
    let last = g.bar_rect(3).unwrap();
    assert_eq!(last.x + last.width, 103.0);
}

#[test]
fn all_zero_series_has_flat_bars() {
    let s = parse("0,0,0", "a,b,c").unwrap();
    let g = layout(&s, &LayoutOptions::default());
    assert_eq!(g.max_value, 1.0);
    assert!(g.scale.is_finite());
    assert_eq!(g.bar_heights, vec![0.0, 0.0, 0.0]);
}

#[test]
fn empty_series_has_empty_geometry() {
    let g = layout(&Series::empty(), &LayoutOptions::default());
    assert!(g.is_empty());
    assert!(g.x_offsets.is_empty());
    assert_eq!(g.bars().count(), 0);
}

#[test]
fn crowded_canvas_floors_bar_width() {
    let values = vec!["1"; 500].join(",");
    let labels = vec!["x"; 500].join(",");
    let s = parse(&values, &labels).unwrap();
    let g = layout(&s, &opts(200.0, 100.0));
    assert_eq!(g.bar_width, 1.0);
    assert_eq!(g.x_offsets[1] - g.x_offsets[0], 3.0);
}

#[test]
fn default_area_matches_svg_canvas() {
    let o = LayoutOptions::default();
    assert_eq!((o.width, o.height), (760.0, 400.0));
}

#[test]
fn tiny_maximum_keeps_geometry_finite() {
    let s = parse("5e-324,0", "a,b").unwrap();
    let g = layout(&s, &LayoutOptions::default());
    assert!(g.scale.is_finite());
    assert!(g.bar_heights.iter().all(|h| h.is_finite() && *h >= 0.0), "{:?}", g.bar_heights);
}
