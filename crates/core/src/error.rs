//! Error types shared across the assembly crates

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while assembling a job environment
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// Blank or otherwise malformed input. A caller bug, never retried.
    #[error("validation error: {0}")]
    Validation(String),

    /// Filesystem mutation failed. Fatal for the current job preparation;
    /// the orchestrator decides whether to retry the preparation or fail
    /// the job.
    #[error("could not provision directory {path}: {source}")]
    Provisioning {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The environment script sink rejected a write. The fragment may be
    /// partially written and the caller must discard the output.
    #[error("failed to write to environment script: {0}")]
    Io(#[from] std::io::Error),
}
