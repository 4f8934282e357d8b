// File: crates/barchart-core/src/error.rs
// Summary: Error kinds surfaced to the user: input validation and the external editor.

use std::time::Duration;

/// Raised when raw text cannot become a [`crate::Series`]. Never fatal: callers
/// clear the drawing surface and show the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("count mismatch: {values} values but {labels} labels")]
    CountMismatch { values: usize, labels: usize },
}

/// Problems reaching or launching the external editor.
#[derive(Debug, thiserror::Error)]
pub enum ExternalToolError {
    #[error("`{command}` was not found; install Emacs or add it to your PATH")]
    NotFound { command: String },
    #[error("`{command}` did not respond within {}s; check your Emacs installation", timeout.as_secs())]
    Timeout { command: String, timeout: Duration },
    #[error("`{command}` exited unsuccessfully ({status}); check your Emacs installation")]
    Failed { command: String, status: String },
    #[error("Emacs integration is disabled in the configuration")]
    Disabled,
    #[error("could not prepare the Emacs script: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error for the pipeline entry points.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    ExternalTool(#[from] ExternalToolError),
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl ChartError {
    /// Text for the single user-facing error channel.
    pub fn user_message(&self) -> String {
        match self {
            ChartError::Validation(e) => format!("Error: {e}. Please provide one label per value."),
            ChartError::ExternalTool(e) => format!("Error: {e}."),
            other => format!("Error: {other}."),
        }
    }
}

impl From<anyhow::Error> for ChartError {
    fn from(value: anyhow::Error) -> Self {
        ChartError::Render(format!("{value:#}"))
    }
}
