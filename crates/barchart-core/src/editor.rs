// File: crates/barchart-core/src/editor.rs
// Summary: Hand a series to Emacs, which draws it as ASCII art from a generated Lisp script.
// Notes:
// - The availability probe (`emacs --version`) has a hard timeout; exceeding it
//   is a failure, never a retry.
// - The editor is spawned detached; the caller never blocks on it. A reaper
//   thread waits on the child so it does not linger as a zombie. The script
//   file is removed after a delay by a second thread; failures there are logged only.

use std::fmt::Write as _;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::ExternalToolError;
use crate::series::Series;

/// Delay before the generated script is deleted.
pub const CLEANUP_DELAY: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(25);
/// Rows used by the generated Lisp renderer.
const SCRIPT_ROWS: usize = 15;

#[derive(Clone, Debug)]
pub struct EditorBridge {
    pub command: String,
    pub timeout: Duration,
    pub cleanup_delay: Duration,
    pub enabled: bool,
}

/// A launched editor. Join `cleanup` to wait for the script to be removed;
/// `reaper` finishes when the editor exits. Dropping either detaches it.
#[derive(Debug)]
pub struct Launch {
    pub script: PathBuf,
    pub version: String,
    pub cleanup: JoinHandle<()>,
    pub reaper: JoinHandle<Option<ExitStatus>>,
}

impl EditorBridge {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            command: cfg.emacs_command.clone(),
            timeout: cfg.emacs_timeout,
            cleanup_delay: CLEANUP_DELAY,
            enabled: cfg.emacs_integration,
        }
    }

    /// Run `<command> --version` and return its first output line.
    pub fn check_available(&self) -> Result<String, ExternalToolError> {
        let mut child = Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                // the process may already be gone; nothing more to do either way
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExternalToolError::Timeout { command: self.command.clone(), timeout: self.timeout });
            }
            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Err(ExternalToolError::Failed { command: self.command.clone(), status: status.to_string() });
        }

        let mut stdout = String::new();
        if let Some(mut out) = child.stdout.take() {
            out.read_to_string(&mut stdout)?;
        }
        let version = stdout.lines().next().unwrap_or_default().trim().to_string();
        debug!("{} is available: {version}", self.command);
        Ok(version)
    }

    /// Check for the editor, write the script into `workdir`, and launch it.
    pub fn open(&self, series: &Series, workdir: impl AsRef<Path>) -> Result<Launch, ExternalToolError> {
        if !self.enabled {
            return Err(ExternalToolError::Disabled);
        }
        let version = self.check_available()?;
        let workdir = workdir.as_ref();

        let mut file = tempfile::Builder::new()
            .prefix("bar-chart-")
            .suffix(".el")
            .tempfile_in(workdir)?;
        file.write_all(generate_script(series).as_bytes())?;
        file.flush()?;
        let script = file.into_temp_path().keep().map_err(|e| ExternalToolError::Io(e.error))?;

        let spawned = Command::new(&self.command)
            .arg("--no-splash")
            .arg("-l")
            .arg(&script)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let child = match spawned {
            Ok(child) => child,
            Err(e) => {
                remove_script(&script);
                return Err(self.spawn_error(e));
            }
        };
        info!("launched {} with {}", self.command, script.display());

        let reaper = reap(child, self.command.clone());
        let cleanup = schedule_cleanup(script.clone(), self.cleanup_delay);
        Ok(Launch { script, version, cleanup, reaper })
    }

    fn spawn_error(&self, e: std::io::Error) -> ExternalToolError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExternalToolError::NotFound { command: self.command.clone() }
        } else {
            ExternalToolError::Io(e)
        }
    }
}

fn reap(mut child: Child, command: String) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!("{command} exited with {status}");
            Some(status)
        }
        Err(e) => {
            warn!("could not wait for {command}: {e}");
            None
        }
    })
}

fn schedule_cleanup(path: PathBuf, delay: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        remove_script(&path);
    })
}

fn remove_script(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("removed {}", path.display()),
        Err(e) => warn!("could not remove {}: {e}", path.display()),
    }
}

/// Emacs Lisp that opens a `*Bar Chart*` buffer and draws the series in it.
/// Values and labels are embedded as literals.
pub fn generate_script(series: &Series) -> String {
    let values = series.values().iter().map(|v| lisp_number(*v)).collect::<Vec<_>>().join(" ");
    let labels = series.labels().iter().map(|l| lisp_string(l)).collect::<Vec<_>>().join(" ");

    let mut s = String::new();
    s.push_str(";;; bar-chart.el --- generated bar chart -*- lexical-binding: t -*-\n\n");
    let _ = writeln!(s, "(defvar bar-chart-values '({values}))");
    let _ = writeln!(s, "(defvar bar-chart-labels '({labels}))");
    s.push_str(SCRIPT_BODY);
    let _ = writeln!(s, "(bar-chart-show bar-chart-values bar-chart-labels {SCRIPT_ROWS})");
    s
}

const SCRIPT_BODY: &str = r#"
(defun bar-chart--num (n)
  (if (= n (truncate n)) (format "%d" (truncate n)) (format "%.2f" n)))

(defun bar-chart-draw (values labels rows)
  "Insert an ASCII bar chart of VALUES and LABELS, ROWS lines high."
  (let* ((peak (if values (apply #'max values) 0))
         (top (if (> peak 0) peak 1))
         (heights (mapcar (lambda (v) (min rows (round (* v (/ (float rows) top))))) values)))
    (dotimes (r rows)
      (let ((level (- rows r)))
        (insert (if (= r 0) (format "%6s |" (bar-chart--num top)) "       |"))
        (dolist (h heights)
          (insert (if (>= h level) " ###" "    ")))
        (insert "\n")))
    (insert "     0 +" (make-string (* 4 (length values)) ?-) "\n")
    (insert "        ")
    (dolist (l labels)
      (insert (format " %-3s" (truncate-string-to-width l 3))))
    (insert "\n")))

(defun bar-chart-show (values labels rows)
  (let ((buf (get-buffer-create "*Bar Chart*")))
    (with-current-buffer buf
      (let ((inhibit-read-only t))
        (erase-buffer)
        (bar-chart-draw values labels rows)
        (goto-char (point-min)))
      (special-mode))
    (switch-to-buffer buf)))

"#;

fn lisp_number(v: f64) -> String {
    format!("{v}")
}

fn lisp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lisp_strings_are_escaped() {
        assert_eq!(lisp_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(lisp_number(2.5), "2.5");
        assert_eq!(lisp_number(10.0), "10");
    }
}
