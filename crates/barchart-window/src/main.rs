// File: crates/barchart-window/src/main.rs
// Summary: Desktop window that renders barchart-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Keys: 1-4 colour mode, P/J/S export PNG/JPEG/SVG, E open in Emacs, Esc quit.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use barchart_core::color::{parse_palette, ColorScheme, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
use barchart_core::export::{self, ExportFormat};
use barchart_core::types::{HEIGHT, WIDTH};
use barchart_core::{logging, parse, BarChart, ChartError, ColorMode, Config, EditorBridge, RenderOptions};
use clap::Parser;
use log::{debug, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Show a bar chart in a window.
#[derive(Debug, Parser)]
#[command(name = "barchart-window", version)]
struct Args {
    #[arg(short, long, default_value = "12,19,3,5,2,3")]
    values: String,
    #[arg(short, long, default_value = "Red,Blue,Yellow,Green,Purple,Orange")]
    labels: String,
    #[arg(short, long, default_value = "flat")]
    mode: ColorMode,
    #[arg(long, default_value = DEFAULT_PRIMARY)]
    primary: String,
    #[arg(long, default_value = DEFAULT_SECONDARY)]
    secondary: String,
    #[arg(long, default_value = "#264653,#2a9d8f,#e9c46a,#f4a261,#e76f51")]
    palette: String,
    /// Directory exports and Emacs scripts are written to.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Raw input plus the chart derived from it. Every action re-runs the whole
/// pipeline from the raw text.
struct App {
    values: String,
    labels: String,
    scheme: ColorScheme,
    dir: PathBuf,
    editor: EditorBridge,
    chart: BarChart,
    error: Option<String>,
}

impl App {
    fn new(args: &Args, cfg: &Config) -> Self {
        let scheme = ColorScheme {
            mode: args.mode,
            primary: args.primary.clone(),
            secondary: Some(args.secondary.clone()),
            palette: parse_palette(&args.palette),
        };
        let opts = RenderOptions::default();
        let mut app = Self {
            values: args.values.clone(),
            labels: args.labels.clone(),
            scheme,
            dir: args.dir.clone(),
            editor: EditorBridge::from_config(cfg),
            chart: BarChart::empty(&opts),
            error: None,
        };
        app.recompute(&opts);
        app
    }

    fn recompute(&mut self, opts: &RenderOptions) {
        match parse(&self.values, &self.labels) {
            Ok(series) => {
                self.chart = BarChart::new(series, &self.scheme, opts);
                self.error = None;
            }
            Err(e) => {
                let msg = ChartError::from(e).user_message();
                eprintln!("{msg}");
                self.chart = BarChart::empty(opts);
                self.error = Some(msg);
            }
        }
    }

    fn export(&self, format: ExportFormat) {
        if self.error.is_some() {
            eprintln!("nothing to export: fix the input first");
            return;
        }
        match export::save_standard(&self.chart, &self.scheme, format, format.default_path(&self.dir)) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => eprintln!("{}", e.user_message()),
        }
    }

    fn open_in_emacs(&self) {
        if self.error.is_some() {
            eprintln!("nothing to open: fix the input first");
            return;
        }
        // The cleanup thread is left running; the window outlives it.
        match self.editor.open(&self.chart.series, &self.dir) {
            Ok(launch) => info!("Emacs ({}) opened {}", launch.version, launch.script.display()),
            Err(e) => eprintln!("{}", ChartError::from(e).user_message()),
        }
    }

    /// Render into a softbuffer frame (0RGB u32 per pixel).
    fn blit(&self, opts: &RenderOptions, frame: &mut [u32]) -> Result<()> {
        if self.error.is_some() {
            let bg = opts.background;
            let px = ((bg.r as u32) << 16) | ((bg.g as u32) << 8) | bg.b as u32;
            frame.fill(px);
            return Ok(());
        }
        let (rgba, _, _) = self.chart.render_to_rgba8(opts).context("render rgba")?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::load(args.config.clone().unwrap_or_else(Config::default_path));
    if let Err(e) = logging::init(&cfg, None) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let mut app = App::new(&args, &cfg);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Bar Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let current_opts = move |size: winit::dpi::PhysicalSize<u32>| RenderOptions {
        width: size.width.max(1),
        height: size.height.max(1),
        ..RenderOptions::default()
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    app.recompute(&current_opts(size));
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let opts = current_opts(size);
                    let mode = match key {
                        VirtualKeyCode::Key1 => Some(ColorMode::Flat),
                        VirtualKeyCode::Key2 => Some(ColorMode::Gradient),
                        VirtualKeyCode::Key3 => Some(ColorMode::Rainbow),
                        VirtualKeyCode::Key4 => Some(ColorMode::Custom),
                        _ => None,
                    };
                    match key {
                        VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                        VirtualKeyCode::P => app.export(ExportFormat::Png),
                        VirtualKeyCode::J => app.export(ExportFormat::Jpeg),
                        VirtualKeyCode::S => app.export(ExportFormat::Svg),
                        VirtualKeyCode::E => app.open_in_emacs(),
                        _ => {}
                    }
                    if let Some(mode) = mode {
                        debug!("colour mode -> {mode}");
                        app.scheme.mode = mode;
                        app.recompute(&opts);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let opts = current_opts(size);
                let (Some(w), Some(h)) = (NonZeroU32::new(opts.width), NonZeroU32::new(opts.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    eprintln!("resize error: {e:?}");
                    return;
                }
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("frame error: {e:?}");
                        return;
                    }
                };
                if let Err(e) = app.blit(&opts, &mut frame) {
                    eprintln!("{}", ChartError::from(e).user_message());
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
