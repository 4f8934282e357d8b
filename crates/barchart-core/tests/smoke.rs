// File: crates/barchart-core/tests/smoke.rs
// Purpose: Basic end-to-end export smoke tests writing PNG, JPEG and SVG files.

use barchart_core::color::ColorScheme;
use barchart_core::export::{self, ExportFormat};
use barchart_core::{parse, BarChart, ColorMode, RenderOptions};

fn sample_chart(opts: &RenderOptions) -> BarChart {
    let scheme = ColorScheme { mode: ColorMode::Gradient, ..ColorScheme::default() };
    BarChart::new(parse("4,8,15,16,23,42", "a,b,c,d,e,f").unwrap(), &scheme, opts)
}

#[test]
fn export_smoke_png() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let chart = sample_chart(&opts);

    let dir = tempfile::tempdir().expect("tempdir");
    let out = ExportFormat::Png.default_path(dir.path().join("nested"));
    export::save(&chart, &opts, ExportFormat::Png, &out).expect("export should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (760, 400));
}

#[test]
fn export_smoke_jpeg() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = export::encode(&sample_chart(&opts), &opts, ExportFormat::Jpeg).expect("encode jpeg");
    assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]), "should be JPEG SOI marker");
}

#[test]
fn export_smoke_svg() {
    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::save(&sample_chart(&opts), &opts, ExportFormat::Svg, dir.path().join("chart.svg"))
        .expect("export svg");
    let text = std::fs::read_to_string(path).expect("read svg");
    assert!(text.starts_with("<svg"));
    assert_eq!(text.matches("<rect").count(), 7);
}

#[test]
fn formats_parse_from_tags() {
    assert_eq!("JPG".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
    assert_eq!("png".parse::<ExportFormat>(), Ok(ExportFormat::Png));
    assert!("gif".parse::<ExportFormat>().is_err());
}

#[test]
fn standard_export_ignores_window_size() {
    let resized = RenderOptions { width: 1200, height: 900, ..RenderOptions::default() };
    let chart = sample_chart(&resized);
    let scheme = ColorScheme { mode: ColorMode::Gradient, ..ColorScheme::default() };

    let dir = tempfile::tempdir().expect("tempdir");
    let path = export::save_standard(&chart, &scheme, ExportFormat::Svg, ExportFormat::Svg.default_path(dir.path()))
        .expect("export svg");
    let text = std::fs::read_to_string(path).expect("read svg");
    assert!(text.contains(r#"width="760" height="400""#), "{text}");

    let opts = RenderOptions::default();
    assert_eq!(text, sample_chart(&opts).render_to_svg_string(&opts));
}
