// File: crates/barchart-core/tests/colors.rs
// Purpose: Colour assignment modes and hex parsing.

use barchart_core::color::{parse_palette, Rgb};
use barchart_core::{assign_colors, hex_to_rgb, ColorMode, ColorScheme};

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn flat_repeats_primary_verbatim() {
    let c = assign_colors(3, ColorMode::Flat, "steelblue", None, None);
    assert_eq!(c.into_vec(), strings(&["steelblue", "steelblue", "steelblue"]));
}

#[test]
fn rainbow_sweeps_hue() {
    let c = assign_colors(4, ColorMode::Rainbow, "#000000", None, None);
    assert_eq!(
        c.into_vec(),
        strings(&["hsl(0,70%,50%)", "hsl(90,70%,50%)", "hsl(180,70%,50%)", "hsl(270,70%,50%)"])
    );
}

#[test]
fn gradient_single_entry_is_primary() {
    let c = assign_colors(1, ColorMode::Gradient, "#ff0000", Some("#0000ff"), None);
    assert_eq!(c.into_vec(), strings(&["rgb(255,0,0)"]));
}

#[test]
fn gradient_ends_on_secondary() {
    let c = assign_colors(3, ColorMode::Gradient, "#ff0000", Some("0000ff"), None);
    assert_eq!(c.into_vec(), strings(&["rgb(255,0,0)", "rgb(128,0,128)", "rgb(0,0,255)"]));
}

#[test]
fn gradient_with_bad_hex_falls_back_to_flat() {
    let c = assign_colors(2, ColorMode::Gradient, "#f00", Some("#0000ff"), None);
    assert_eq!(c.into_vec(), strings(&["#f00", "#f00"]));
}

#[test]
fn custom_palette_cycles() {
    let palette = strings(&["#ff0000", "#00ff00"]);
    let c = assign_colors(4, ColorMode::Custom, "#000000", None, Some(&palette));
    assert_eq!(c.into_vec(), strings(&["#ff0000", "#00ff00", "#ff0000", "#00ff00"]));
}

#[test]
fn custom_palette_truncates_when_longer() {
    let palette = parse_palette("red, green ,blue,,");
    let c = assign_colors(2, ColorMode::Custom, "#000000", None, Some(&palette));
    assert_eq!(c.into_vec(), strings(&["red", "green"]));
}

#[test]
fn zero_count_yields_nothing() {
    for mode in ColorMode::ALL {
        assert!(ColorScheme { mode, ..ColorScheme::default() }.assign(0).is_empty());
    }
}

#[test]
fn hex_parsing_is_strict() {
    assert_eq!(hex_to_rgb("#1a2B3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
    assert_eq!(hex_to_rgb("ffffff"), Some(Rgb::new(255, 255, 255)));
    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("red"), None);
    assert_eq!(hex_to_rgb("#12345g"), None);
    assert_eq!(hex_to_rgb("#1234567"), None);
}

#[test]
fn modes_parse_from_names() {
    assert_eq!("Rainbow".parse::<ColorMode>(), Ok(ColorMode::Rainbow));
    assert_eq!("custom-palette".parse::<ColorMode>(), Ok(ColorMode::Custom));
    assert!("plaid".parse::<ColorMode>().is_err());
}
