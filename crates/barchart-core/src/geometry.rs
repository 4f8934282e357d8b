// File: crates/barchart-core/src/geometry.rs
// Summary: Bar layout shared by every renderer (canvas, SVG, ASCII).

use crate::series::Series;
use crate::types::{Padding, BAR_SPACING, HEIGHT, WIDTH};

/// Target drawing area. Units are pixels for the canvas/SVG and character
/// cells for ASCII; the math is identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub bar_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: WIDTH as f64,
            height: HEIGHT as f64,
            padding: Padding::default(),
            bar_spacing: BAR_SPACING,
        }
    }
}

/// Output of [`layout`]: one height and offset per bar plus the axis scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub bar_width: f64,
    pub bar_heights: Vec<f64>,
    pub x_offsets: Vec<f64>,
    /// Units of height per unit of value.
    pub scale: f64,
    /// Value mapped to the top of the plot area (1 for empty/all-zero input).
    pub max_value: f64,
    /// Y coordinate of the baseline (top-left origin).
    pub baseline: f64,
}

/// Axis-aligned bar rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 { self.x + self.width * 0.5 }
}

impl Geometry {
    pub fn len(&self) -> usize { self.bar_heights.len() }
    pub fn is_empty(&self) -> bool { self.bar_heights.is_empty() }

    pub fn bar_rect(&self, i: usize) -> Option<BarRect> {
        let h = *self.bar_heights.get(i)?;
        let x = *self.x_offsets.get(i)?;
        Some(BarRect { x, y: self.baseline - h, width: self.bar_width, height: h })
    }

    pub fn bars(&self) -> impl Iterator<Item = BarRect> + '_ {
        (0..self.len()).filter_map(move |i| self.bar_rect(i))
    }
}

/// Compute bar geometry for `series` inside `opts`.
///
/// Contract: never divides by zero; `bar_width >= 1` whenever the series is
/// non-empty; an empty series yields empty vectors.
pub fn layout(series: &Series, opts: &LayoutOptions) -> Geometry {
    let n = series.len();
    let max_value = match series.max_value() {
        Some(m) if m > 0.0 => m,
        _ => 1.0,
    };
    let plot_height = (opts.height - opts.padding.vsum()).max(0.0);
    let mut scale = plot_height / max_value;
    // subnormal maxima overflow the division
    if !scale.is_finite() {
        scale = 0.0;
    }
    let baseline = opts.height - opts.padding.bottom;

    if n == 0 {
        return Geometry {
            bar_width: 0.0,
            bar_heights: Vec::new(),
            x_offsets: Vec::new(),
            scale,
            max_value,
            baseline,
        };
    }

    let usable = opts.width - opts.padding.hsum() - (n as f64 - 1.0) * opts.bar_spacing;
    let mut bar_width = usable / n as f64;
    if bar_width <= 0.0 || bar_width.is_nan() {
        bar_width = 1.0;
    }

    let bar_heights = series.values().iter().map(|v| v * scale).collect();
    let step = bar_width + opts.bar_spacing;
    let x_offsets = (0..n).map(|i| opts.padding.side + i as f64 * step).collect();

    Geometry { bar_width, bar_heights, x_offsets, scale, max_value, baseline }
}
