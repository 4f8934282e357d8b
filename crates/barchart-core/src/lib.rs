// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; input parsing, bar geometry, colours, and the canvas/SVG/ASCII renderers.

pub mod types;
pub mod error;
pub mod series;
pub mod geometry;
pub mod color;
pub mod chart;
pub mod svg;
pub mod ascii;
pub mod export;
pub mod editor;
pub mod config;
pub mod logging;

pub use chart::{BarChart, RenderOptions};
pub use series::{parse, Series};
pub use geometry::{layout, Geometry, LayoutOptions};
pub use color::{assign_colors, hex_to_rgb, ColorAssignment, ColorMode, ColorScheme};
pub use ascii::AsciiOptions;
pub use export::ExportFormat;
pub use editor::EditorBridge;
pub use config::Config;
pub use error::{ChartError, ExternalToolError, ValidationError};
