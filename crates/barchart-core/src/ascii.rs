// File: crates/barchart-core/src/ascii.rs
// Summary: ASCII-art renderer; the shared layout evaluated in character cells.

use crate::geometry::{layout, LayoutOptions};
use crate::series::Series;
use crate::types::{format_value, Padding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiOptions {
    /// Height of the bar area in text rows.
    pub rows: usize,
    /// Columns per bar.
    pub bar_width: usize,
    /// Blank columns between bars.
    pub spacing: usize,
    pub fill: char,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self { rows: 15, bar_width: 3, spacing: 1, fill: '#' }
    }
}

impl AsciiOptions {
    /// Cell grid sized so the shared layout yields exactly `bar_width` columns per bar.
    pub fn layout_options(&self, n: usize) -> LayoutOptions {
        let cols = n * self.bar_width + n.saturating_sub(1) * self.spacing;
        LayoutOptions {
            width: cols as f64,
            height: self.rows as f64,
            padding: Padding::new(0.0, 0.0, 0.0),
            bar_spacing: self.spacing as f64,
        }
    }
}

/// Render `series` as text. An empty series renders as an empty string.
pub fn render(series: &Series, opts: &AsciiOptions) -> String {
    if series.is_empty() {
        return String::new();
    }
    let n = series.len();
    let geom = layout(series, &opts.layout_options(n));
    let cells: Vec<usize> = geom
        .bar_heights
        .iter()
        .map(|h| (h.round() as usize).min(opts.rows))
        .collect();

    let top = format_value(geom.max_value);
    let pw = top.chars().count().max(1);
    let bw = opts.bar_width.max(1);
    let gap = " ".repeat(opts.spacing);
    let mut out = String::new();

    for r in 0..opts.rows {
        let level = opts.rows - r;
        let tag = if r == 0 { top.as_str() } else { "" };
        let mut line = format!("{tag:>pw$} |");
        for (i, &c) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(&gap);
            }
            let ch = if c >= level { opts.fill } else { ' ' };
            line.extend(std::iter::repeat(ch).take(bw));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let cols = n * bw + (n - 1) * opts.spacing;
    out.push_str(&format!("{:>pw$} +{}\n", "0", "-".repeat(cols)));

    let mut labels = " ".repeat(pw + 2);
    for (i, label) in series.labels().iter().enumerate() {
        if i > 0 {
            labels.push_str(&gap);
        }
        let short: String = label.chars().take(bw).collect();
        labels.push_str(&format!("{short:^bw$}"));
    }
    out.push_str(labels.trim_end());
    out.push('\n');
    out
}
