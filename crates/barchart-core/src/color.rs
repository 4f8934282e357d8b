// File: crates/barchart-core/src/color.rs
// Summary: Per-bar colour assignment (flat, gradient, rainbow, custom palette) and CSS colour helpers.

use std::fmt;
use std::str::FromStr;

use log::warn;

/// Rainbow saturation, percent.
pub const RAINBOW_SATURATION: f64 = 70.0;
/// Rainbow lightness, percent.
pub const RAINBOW_LIGHTNESS: f64 = 50.0;

/// Default bar colour.
pub const DEFAULT_PRIMARY: &str = "#4a90d9";
/// Default gradient end colour.
pub const DEFAULT_SECONDARY: &str = "#d94a4a";

/// Simple 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation, `t` in [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// HSL colour: h in degrees, s and l in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl fmt::Display for Hsl {
    /// Format as CSS: hsl(h,s%,l%)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 { t += 1.0; }
            if t > 1.0 { t -= 1.0; }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        let to8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(
            to8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to8(hue_to_rgb(p, q, h)),
            to8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Parse `#rrggbb` or `rrggbb`. Shorthand, named colours and anything else
/// are rejected.
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Flat,
    Gradient,
    Rainbow,
    Custom,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [ColorMode::Flat, ColorMode::Gradient, ColorMode::Rainbow, ColorMode::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Flat => "flat",
            ColorMode::Gradient => "gradient",
            ColorMode::Rainbow => "rainbow",
            ColorMode::Custom => "custom",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "single" => Ok(Self::Flat),
            "gradient" => Ok(Self::Gradient),
            "rainbow" => Ok(Self::Rainbow),
            "custom" | "custom-palette" | "palette" => Ok(Self::Custom),
            other => Err(format!("unknown colour mode `{other}` (expected flat, gradient, rainbow or custom)")),
        }
    }
}

/// One CSS colour string per bar, position-aligned with the series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment(Vec<String>);

impl ColorAssignment {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn get(&self, i: usize) -> Option<&str> { self.0.get(i).map(String::as_str) }
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ { self.0.iter().map(String::as_str) }
    pub fn into_vec(self) -> Vec<String> { self.0 }
}

impl From<Vec<String>> for ColorAssignment {
    fn from(value: Vec<String>) -> Self { Self(value) }
}

/// Produce exactly `count` colours for `mode`.
pub fn assign_colors(
    count: usize,
    mode: ColorMode,
    primary: &str,
    secondary: Option<&str>,
    palette: Option<&[String]>,
) -> ColorAssignment {
    let flat = || ColorAssignment(vec![primary.to_string(); count]);
    match mode {
        ColorMode::Flat => flat(),
        ColorMode::Gradient => {
            let ends = hex_to_rgb(primary).zip(secondary.and_then(hex_to_rgb));
            let Some((start, end)) = ends else {
                warn!("gradient needs two #rrggbb colours (got {primary:?}, {secondary:?}); using flat colour");
                return flat();
            };
            let colors = (0..count)
                .map(|i| {
                    let t = if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };
                    start.lerp(end, t).to_string()
                })
                .collect();
            ColorAssignment(colors)
        }
        ColorMode::Rainbow => {
            let colors = (0..count)
                .map(|i| {
                    let h = i as f64 * 360.0 / count as f64;
                    Hsl { h, s: RAINBOW_SATURATION, l: RAINBOW_LIGHTNESS }.to_string()
                })
                .collect();
            ColorAssignment(colors)
        }
        ColorMode::Custom => {
            let list: Vec<&str> = palette
                .unwrap_or_default()
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect();
            if list.is_empty() {
                warn!("custom palette is empty; using flat colour");
                return flat();
            }
            ColorAssignment((0..count).map(|i| list[i % list.len()].to_string()).collect())
        }
    }
}

/// Split a comma-separated palette the way the input fields are split.
pub fn parse_palette(text: &str) -> Vec<String> {
    text.split(',').map(str::trim).filter(|c| !c.is_empty()).map(String::from).collect()
}

/// Everything needed to colour a chart; the value the front-ends hold.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    pub mode: ColorMode,
    pub primary: String,
    pub secondary: Option<String>,
    pub palette: Vec<String>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            mode: ColorMode::Flat,
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: Some(DEFAULT_SECONDARY.to_string()),
            palette: Vec::new(),
        }
    }
}

impl ColorScheme {
    pub fn assign(&self, count: usize) -> ColorAssignment {
        assign_colors(count, self.mode, &self.primary, self.secondary.as_deref(), Some(&self.palette))
    }
}

/// Resolve a CSS colour string for raster drawing. Covers what
/// [`assign_colors`] emits plus `#rgb` and a handful of names.
pub fn parse_css_color(s: &str) -> Option<Rgb> {
    let s = s.trim();
    if let Some(rgb) = hex_to_rgb(s) {
        return Some(rgb);
    }
    let lower = s.to_ascii_lowercase();
    if let Some(short) = lower.strip_prefix('#') {
        if short.len() == 3 && short.bytes().all(|b| b.is_ascii_hexdigit()) {
            let d = |i: usize| u8::from_str_radix(&short[i..i + 1], 16).ok().map(|v| v * 17);
            return Some(Rgb::new(d(0)?, d(1)?, d(2)?));
        }
        return None;
    }
    if let Some(args) = function_args(&lower, "rgb") {
        let [r, g, b] = args.as_slice() else { return None };
        let ch = |v: &str| v.parse::<f64>().ok().map(|x| x.round().clamp(0.0, 255.0) as u8);
        return Some(Rgb::new(ch(*r)?, ch(*g)?, ch(*b)?));
    }
    if let Some(args) = function_args(&lower, "hsl") {
        let [h, sat, l] = args.as_slice() else { return None };
        let pct = |v: &str| v.trim_end_matches('%').parse::<f64>().ok();
        return Some(Hsl { h: h.parse().ok()?, s: pct(*sat)?, l: pct(*l)? }.to_rgb());
    }
    named_color(&lower)
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = s.strip_prefix(name)?.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb::new(0, 0, 0),
        "white" => Rgb::new(255, 255, 255),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "lime" => Rgb::new(0, 255, 0),
        "blue" => Rgb::new(0, 0, 255),
        "yellow" => Rgb::new(255, 255, 0),
        "orange" => Rgb::new(255, 165, 0),
        "purple" => Rgb::new(128, 0, 128),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "steelblue" => Rgb::new(70, 130, 180),
        _ => return None,
    };
    Some(rgb)
}
