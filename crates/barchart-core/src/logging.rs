// File: crates/barchart-core/src/logging.rs
// Summary: log4rs setup driven by the DEBUG/VERBOSE config flags.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::{console::ConsoleAppender, console::Target, file::FileAppender},
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::config::Config;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Level implied by the config flags. DEBUG wins over VERBOSE.
pub fn level_for(cfg: &Config) -> LevelFilter {
    if cfg.debug {
        LevelFilter::Debug
    } else if cfg.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger: stderr always, plus `file` when given.
pub fn init(cfg: &Config, file: Option<&str>) -> Result<()> {
    let level = level_for(cfg);
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let mut builder = LogConfig::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)
            .with_context(|| format!("opening log file {path}"))?;
        builder = builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let config = builder.build(root.build(level)).context("building log config")?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}
