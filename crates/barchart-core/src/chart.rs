// File: crates/barchart-core/src/chart.rs
// Summary: BarChart draw request and the headless canvas renderer using Skia CPU raster surfaces.

use anyhow::Result;
use log::{debug, warn};
use skia_safe as skia;

use crate::color::{parse_css_color, ColorAssignment, ColorScheme, Rgb, DEFAULT_PRIMARY};
use crate::geometry::{layout, Geometry, LayoutOptions};
use crate::series::Series;
use crate::types::{format_value, Padding, AXIS_LABEL_GAP, BAR_SPACING, FONT_SIZE, HEIGHT, LABEL_OFFSET, WIDTH};

/// Axis line and tick text colour.
pub const AXIS_COLOR: Rgb = Rgb::new(51, 51, 51);
/// Label text colour.
pub const TEXT_COLOR: Rgb = Rgb::new(34, 34, 34);

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub bar_spacing: f64,
    pub background: Rgb,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Padding::default(),
            bar_spacing: BAR_SPACING,
            background: Rgb::new(255, 255, 255),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            width: self.width as f64,
            height: self.height as f64,
            padding: self.padding,
            bar_spacing: self.bar_spacing,
        }
    }
}

/// One draw request: the series plus the geometry and colours derived from it.
/// Every renderer consumes this triple; none recomputes layout on its own.
#[derive(Clone, Debug)]
pub struct BarChart {
    pub series: Series,
    pub geometry: Geometry,
    pub colors: ColorAssignment,
}

impl BarChart {
    pub fn new(series: Series, scheme: &ColorScheme, opts: &RenderOptions) -> Self {
        Self::with_layout(series, scheme, &opts.layout_options())
    }

    pub fn with_layout(series: Series, scheme: &ColorScheme, layout_opts: &LayoutOptions) -> Self {
        let geometry = layout(&series, layout_opts);
        let colors = scheme.assign(series.len());
        debug!(
            "chart: {} bars, width {:.2}, scale {:.4}, max {}",
            series.len(),
            geometry.bar_width,
            geometry.scale,
            geometry.max_value
        );
        Self { series, geometry, colors }
    }

    /// Chart with no bars: what a failed validation draws.
    pub fn empty(opts: &RenderOptions) -> Self {
        Self::new(Series::empty(), &ColorScheme::default(), opts)
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32)> {
        let (w, h) = (opts.width as i32, opts.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, opts.width, opts.height))
    }

    /// Render into an `image` buffer for encoding.
    pub fn render_to_image(&self, opts: &RenderOptions) -> Result<image::RgbaImage> {
        let (pixels, w, h) = self.render_to_rgba8(opts)?;
        image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))
    }

    /// Draw onto any Skia canvas (raster, GPU, or a window surface).
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(to_skia(opts.background));

        let g = &self.geometry;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        for (i, bar) in g.bars().enumerate() {
            fill.set_color(to_skia(resolve(self.colors.get(i))));
            let rect = skia::Rect::from_xywh(bar.x as f32, bar.y as f32, bar.width as f32, bar.height as f32);
            canvas.draw_rect(rect, &fill);
        }

        draw_axes(canvas, opts, g);

        if opts.draw_labels {
            draw_labels(canvas, opts, self);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn resolve(css: Option<&str>) -> Rgb {
    let fallback = || parse_css_color(DEFAULT_PRIMARY).unwrap_or(Rgb::new(74, 144, 217));
    match css {
        Some(s) => parse_css_color(s).unwrap_or_else(|| {
            warn!("cannot draw colour {s:?}; using default");
            fallback()
        }),
        None => fallback(),
    }
}

fn draw_axes(canvas: &skia::Canvas, opts: &RenderOptions, g: &Geometry) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(to_skia(AXIS_COLOR));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let l = opts.padding.side as f32;
    let r = (opts.width as f64 - opts.padding.side) as f32;
    let t = opts.padding.top as f32;
    let b = g.baseline as f32;

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, opts: &RenderOptions, chart: &BarChart) {
    let g = &chart.geometry;
    let mut paint_text = skia::Paint::default();
    paint_text.set_anti_alias(true);
    paint_text.set_color(to_skia(TEXT_COLOR));
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE as f32);

    let label_y = (g.baseline + LABEL_OFFSET) as f32;
    for (bar, label) in g.bars().zip(chart.series.labels()) {
        let (advance, _) = font.measure_str(label, Some(&paint_text));
        let x = bar.center_x() as f32 - advance * 0.5;
        canvas.draw_str(label, (x, label_y), &font, &paint_text);
    }

    // Y axis extremes, right-aligned against the axis
    let axis_x = (opts.padding.side - AXIS_LABEL_GAP) as f32;
    let top = format_value(g.max_value);
    let (top_w, _) = font.measure_str(&top, Some(&paint_text));
    canvas.draw_str(&top, (axis_x - top_w, (opts.padding.top + FONT_SIZE * 0.4) as f32), &font, &paint_text);
    let (zero_w, _) = font.measure_str("0", Some(&paint_text));
    canvas.draw_str("0", (axis_x - zero_w, g.baseline as f32), &font, &paint_text);
}
