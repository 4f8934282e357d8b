// File: crates/barchart-cli/src/main.rs
// Summary: Command-line front-end; runs parse -> layout/colours -> render, then prints, exports, or opens Emacs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use barchart_core::color::{parse_palette, ColorScheme, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
use barchart_core::export::{self, ExportFormat};
use barchart_core::series::parse_or_empty;
use barchart_core::{ascii, logging, AsciiOptions, BarChart, ChartError, ColorMode, Config, EditorBridge, RenderOptions};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Ascii,
    Svg,
    Png,
    Jpeg,
}

/// Render a bar chart from comma-separated values and labels.
#[derive(Debug, Parser)]
#[command(name = "barchart", version)]
struct Args {
    /// Comma-separated numbers; unparseable entries are dropped, negatives become 0.
    #[arg(short, long, default_value = "")]
    values: String,
    /// Comma-separated labels, one per remaining value.
    #[arg(short, long, default_value = "")]
    labels: String,
    /// Two-column `label,value` CSV file used instead of --values/--labels.
    #[arg(long, conflicts_with_all = ["values", "labels"])]
    csv: Option<PathBuf>,
    /// Colour mode: flat, gradient, rainbow or custom.
    #[arg(short, long, default_value = "flat")]
    mode: ColorMode,
    #[arg(long, default_value = DEFAULT_PRIMARY)]
    primary: String,
    #[arg(long, default_value = DEFAULT_SECONDARY)]
    secondary: String,
    /// Comma-separated colours for `--mode custom`; repeats when shorter than the data.
    #[arg(long, default_value = "")]
    palette: String,
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Output file; SVG and ASCII go to stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Open the chart in Emacs as ASCII art.
    #[arg(long)]
    emacs: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = Config::load(args.config.clone().unwrap_or_else(Config::default_path));
    if let Err(e) = logging::init(&cfg, args.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match run(&args, &cfg) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, cfg: &Config) -> Result<ExitCode> {
    let (values, labels) = match &args.csv {
        Some(path) => load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => (args.values.clone(), args.labels.clone()),
    };

    let (series, invalid) = parse_or_empty(&values, &labels);
    if let Some(e) = &invalid {
        eprintln!("{}", ChartError::from(e.clone()).user_message());
    }
    debug!("series has {} entries", series.len());

    let scheme = ColorScheme {
        mode: args.mode,
        primary: args.primary.clone(),
        secondary: Some(args.secondary.clone()),
        palette: parse_palette(&args.palette),
    };
    let opts = RenderOptions::default();
    let chart = BarChart::new(series, &scheme, &opts);

    match args.format {
        OutputFormat::Ascii => {
            let text = ascii::render(&chart.series, &AsciiOptions::default());
            emit_text(&text, args.out.as_deref())?;
        }
        OutputFormat::Svg => match &args.out {
            Some(path) => report(export::save(&chart, &opts, ExportFormat::Svg, path))?,
            None => emit_text(&chart.render_to_svg_string(&opts), None)?,
        },
        OutputFormat::Png | OutputFormat::Jpeg => {
            let format = if args.format == OutputFormat::Png { ExportFormat::Png } else { ExportFormat::Jpeg };
            let path = args.out.clone().unwrap_or_else(|| format.default_path("."));
            report(export::save(&chart, &opts, format, path))?;
        }
    }

    if args.emacs && invalid.is_none() {
        let workdir = std::env::current_dir().context("reading working directory")?;
        match EditorBridge::from_config(cfg).open(&chart.series, &workdir) {
            Ok(launch) => {
                info!("Emacs ({}) opened {}", launch.version, launch.script.display());
                // keep the process alive until the script is removed
                if launch.cleanup.join().is_err() {
                    warn!("script cleanup thread panicked");
                }
            }
            Err(e) => eprintln!("{}", ChartError::from(e).user_message()),
        }
    }

    Ok(if invalid.is_some() { ExitCode::from(2) } else { ExitCode::SUCCESS })
}

fn report(saved: Result<PathBuf, ChartError>) -> Result<()> {
    match saved {
        Ok(path) => {
            println!("Wrote {}", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn emit_text(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Load `label,value` rows into the two comma-separated input strings.
/// A first row whose value column is not numeric is treated as a header.
fn load_csv(path: &Path) -> Result<(String, String)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(0).unwrap_or_default();
        let value = rec.get(1).unwrap_or_default();
        if i == 0 && value.parse::<f64>().is_err() {
            debug!("skipping CSV header {:?}", rec);
            continue;
        }
        if label.contains(',') {
            warn!("label {label:?} contains a comma; replacing with a space");
        }
        labels.push(label.replace(',', " "));
        values.push(value.to_string());
    }
    Ok((values.join(","), labels.join(",")))
}
