// File: crates/barchart-core/src/export.rs
// Summary: Encode a rendered chart (PNG, JPEG, SVG) and save it to disk.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use log::info;

use crate::chart::{BarChart, RenderOptions};
use crate::color::ColorScheme;
use crate::error::ChartError;

/// Lossy quality for JPEG, out of 100.
pub const JPEG_QUALITY: u8 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Svg => "svg",
        }
    }

    /// `bar-chart.<ext>` in `dir`.
    pub fn default_path(self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("bar-chart.{}", self.extension()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            other => Err(format!("unknown export format `{other}` (expected png, jpeg or svg)")),
        }
    }
}

/// Encode `chart` in `format`.
pub fn encode(chart: &BarChart, opts: &RenderOptions, format: ExportFormat) -> Result<Vec<u8>, ChartError> {
    match format {
        ExportFormat::Svg => Ok(chart.render_to_svg_string(opts).into_bytes()),
        ExportFormat::Png => {
            let img = chart.render_to_image(opts)?;
            let mut buf = Cursor::new(Vec::new());
            img.write_to(&mut buf, ImageFormat::Png)?;
            Ok(buf.into_inner())
        }
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(chart.render_to_image(opts)?).to_rgb8();
            let mut buf = Vec::new();
            JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode_image(&rgb)?;
            Ok(buf)
        }
    }
}

/// Encode and write to `path`, creating parent directories.
pub fn save(
    chart: &BarChart,
    opts: &RenderOptions,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ChartError> {
    let path = path.as_ref();
    let bytes = encode(chart, opts, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    info!("exported {} ({} bytes) to {}", format, bytes.len(), path.display());
    Ok(path.to_path_buf())
}

/// Save `chart`'s series on the standard 760x400 surface, whatever size it
/// was last laid out for.
pub fn save_standard(
    chart: &BarChart,
    scheme: &ColorScheme,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ChartError> {
    let opts = RenderOptions::default();
    let standard = BarChart::new(chart.series.clone(), scheme, &opts);
    save(&standard, &opts, format, path)
}
