// File: crates/barchart-core/src/config.rs
// Summary: Feature flags read once at startup from a `KEY value` text file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "bar-chart.conf";

/// Startup configuration. Passed explicitly to every component that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `EMACS_INTEGRATION`: allow handing charts to the external editor.
    pub emacs_integration: bool,
    /// `DEBUG`: debug-level logging.
    pub debug: bool,
    /// `VERBOSE`: info-level logging.
    pub verbose: bool,
    /// `EMACS_COMMAND`: program name or path of the editor.
    pub emacs_command: String,
    /// `EMACS_TIMEOUT`: seconds allowed for the availability check.
    pub emacs_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emacs_integration: true,
            debug: false,
            verbose: false,
            emacs_command: "emacs".to_string(),
            emacs_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Path used when no explicit path is given.
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Load from `path`, returning defaults when the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("loading config from {}", path.display());
                Self::parse(&content)
            }
            Err(e) => {
                debug!("no config at {} ({e}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse file contents. Unknown keys and bad values are skipped.
    pub fn parse(content: &str) -> Self {
        let mut cfg = Self::default();
        for (lineno, line) in content.lines().enumerate() {
            let Some((key, value)) = split_line(line) else { continue };
            match key {
                "EMACS_INTEGRATION" => set_flag(&mut cfg.emacs_integration, key, value, lineno),
                "DEBUG" => set_flag(&mut cfg.debug, key, value, lineno),
                "VERBOSE" => set_flag(&mut cfg.verbose, key, value, lineno),
                "EMACS_COMMAND" if value.is_empty() => {
                    warn!("config line {}: EMACS_COMMAND has an empty value", lineno + 1)
                }
                "EMACS_COMMAND" => cfg.emacs_command = value.to_string(),
                "EMACS_TIMEOUT" => match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => cfg.emacs_timeout = Duration::from_secs(secs),
                    _ => warn!("config line {}: bad EMACS_TIMEOUT {value:?}", lineno + 1),
                },
                _ => warn!("config line {}: ignoring unknown key {key:?}", lineno + 1),
            }
        }
        cfg
    }
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((k, v)) => Some((k, v.trim())),
        None => Some((line, "")),
    }
}

fn set_flag(slot: &mut bool, key: &str, value: &str, lineno: usize) {
    match parse_flag(value) {
        Some(v) => *slot = v,
        None => warn!("config line {}: {key} expects 0 or 1, got {value:?}", lineno + 1),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skips_comments_and_blanks() {
        assert_eq!(split_line("  # EMACS_INTEGRATION 0"), None);
        assert_eq!(split_line(""), None);
        assert_eq!(split_line("DEBUG\t 1 "), Some(("DEBUG", "1")));
        assert_eq!(split_line("VERBOSE"), Some(("VERBOSE", "")));
    }

    #[test]
    fn flags_accept_words() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
