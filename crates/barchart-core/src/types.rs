// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (surface size, paddings, bar spacing).

/// Default surface width in pixels. Shared by the canvas and SVG renderers.
pub const WIDTH: u32 = 760;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;
/// Default gap between adjacent bars, in pixels.
pub const BAR_SPACING: f64 = 10.0;

/// Plot margins, in pixels. Sides are symmetric.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub side: f64,
}

impl Padding {
    pub const fn new(top: f64, bottom: f64, side: f64) -> Self {
        Self { top, bottom, side }
    }
    /// Total horizontal padding (both sides).
    pub fn hsum(&self) -> f64 { self.side * 2.0 }
    /// Total vertical padding (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(30.0, 50.0, 50.0)
    }
}

/// Distance from the baseline down to the label text baseline.
pub const LABEL_OFFSET: f64 = 20.0;
/// Gap between the Y axis and its value labels.
pub const AXIS_LABEL_GAP: f64 = 6.0;
/// Font size used for labels on both canvas and SVG.
pub const FONT_SIZE: f64 = 12.0;

/// Text for an axis value: integers print bare, others with up to two decimals.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
