//! Probe error type.
//!
//! Anticipated driver behaviors never reach this type; they are classified
//! into [`super::UriSupport`] first. What remains is genuinely unexpected and
//! terminates the run through the CLI error path.

use thiserror::Error;

/// Failure of the probe itself, as opposed to a classified driver answer.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The driver failed in a way the classifier does not recognize.
    #[error("sqlite driver error: {0}")]
    Driver(#[from] rusqlite::Error),
    /// Scratch database cleanup failed.
    #[error("scratch cleanup failed: {0}")]
    Cleanup(#[from] std::io::Error),
}
