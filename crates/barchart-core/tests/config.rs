// File: crates/barchart-core/tests/config.rs
// Purpose: KEY value config loading and defaults.

use std::time::Duration;

use barchart_core::logging::level_for;
use barchart_core::Config;
use log::LevelFilter;

#[test]
fn defaults_when_file_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = Config::load(dir.path().join("nope.conf"));
    assert_eq!(cfg, Config::default());
    assert!(cfg.emacs_integration);
    assert!(!cfg.debug);
    assert!(!cfg.verbose);
}

#[test]
fn reads_flags_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bar-chart.conf");
    std::fs::write(
        &path,
        "# local overrides\nEMACS_INTEGRATION 0\n\nVERBOSE 1\nEMACS_COMMAND /opt/emacs/bin/emacs\nEMACS_TIMEOUT 9\n",
    )
    .unwrap();
    let cfg = Config::load(&path);
    assert!(!cfg.emacs_integration);
    assert!(cfg.verbose);
    assert!(!cfg.debug);
    assert_eq!(cfg.emacs_command, "/opt/emacs/bin/emacs");
    assert_eq!(cfg.emacs_timeout, Duration::from_secs(9));
}

#[test]
fn bad_lines_keep_defaults() {
    let cfg = Config::parse("DEBUG maybe\nCOLOR blue\nEMACS_TIMEOUT 0\nVERBOSE\n");
    assert_eq!(cfg, Config::default());
}

#[test]
fn log_level_follows_flags() {
    let mut cfg = Config::default();
    assert_eq!(level_for(&cfg), LevelFilter::Warn);
    cfg.verbose = true;
    assert_eq!(level_for(&cfg), LevelFilter::Info);
    cfg.debug = true;
    assert_eq!(level_for(&cfg), LevelFilter::Debug);
}

#[test]
fn empty_emacs_command_keeps_default() {
    let cfg = Config::parse("EMACS_COMMAND\nEMACS_COMMAND   \nDEBUG 1\n");
    assert_eq!(cfg.emacs_command, "emacs");
    assert!(cfg.debug);
}
