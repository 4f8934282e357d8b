// File: crates/barchart-core/src/svg.rs
// Summary: SVG document renderer; mirrors the canvas layout element for element.

use std::fmt::Write as _;

use crate::chart::{BarChart, RenderOptions, AXIS_COLOR, TEXT_COLOR};
use crate::types::{format_value, AXIS_LABEL_GAP, FONT_SIZE, LABEL_OFFSET};

impl BarChart {
    /// Serialize to a standalone SVG document.
    ///
    /// Shape: background `<rect>`, one `<rect>` and one `<text>` per bar, two
    /// axis `<line>`s and two axis value `<text>`s (max and zero).
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        let (w, h) = (opts.width, opts.height);
        let g = &self.geometry;
        let mut out = String::with_capacity(512 + self.series.len() * 160);

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, opts.background.to_hex());

        for (i, bar) in g.bars().enumerate() {
            let fill = self.colors.get(i).unwrap_or(crate::color::DEFAULT_PRIMARY);
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(bar.x),
                num(bar.y),
                num(bar.width),
                num(bar.height),
                escape_xml(fill)
            );
        }

        let text_fill = TEXT_COLOR.to_hex();
        if opts.draw_labels {
            for (bar, label) in g.bars().zip(self.series.labels()) {
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" fill="{text_fill}">{}</text>"#,
                    num(bar.center_x()),
                    num(g.baseline + LABEL_OFFSET),
                    num(FONT_SIZE),
                    escape_xml(label)
                );
            }
        }

        let axis = AXIS_COLOR.to_hex();
        let left = opts.padding.side;
        let right = opts.width as f64 - opts.padding.side;
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{axis}" stroke-width="1"/>"#,
            num(left),
            num(g.baseline),
            num(right),
            num(g.baseline)
        );
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{axis}" stroke-width="1"/>"#,
            num(left),
            num(opts.padding.top),
            num(left),
            num(g.baseline)
        );

        let axis_x = num(left - AXIS_LABEL_GAP);
        let _ = writeln!(
            out,
            r#"  <text x="{axis_x}" y="{}" font-size="{}" text-anchor="end" fill="{text_fill}">{}</text>"#,
            num(opts.padding.top + FONT_SIZE * 0.4),
            num(FONT_SIZE),
            format_value(g.max_value)
        );
        let _ = writeln!(
            out,
            r#"  <text x="{axis_x}" y="{}" font-size="{}" text-anchor="end" fill="{text_fill}">0</text>"#,
            num(g.baseline),
            num(FONT_SIZE)
        );
        out.push_str("</svg>\n");
        out
    }
}

/// Coordinates with at most two decimals, trailing zeros dropped.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
