//! Error handling for nodewatch-sources
//!
//! Adapter failures are described by [`SourceError`] and cross into the core
//! as `ExError`: transport problems become `Fetch`, payload problems keep the
//! core's `InvalidSnapshot` classification.

use nodewatch_core::errors::{ExError, ExErrorKind, NodeError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The lister program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The lister program ran but reported failure
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The HTTP request did not complete
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP request completed with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// A snapshot file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a usable node list
    #[error(transparent)]
    Snapshot(#[from] NodeError),
}

impl From<SourceError> for ExError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Snapshot(node_err) => ExError::from(node_err).with_op("fetch"),
            other => ExError::new(ExErrorKind::Fetch)
                .with_op("fetch")
                .with_message(other.to_string()),
        }
    }
}

/// Convert an adapter error, tagging it with the adapter's description
pub fn fetch_error(source_name: &str, err: SourceError) -> ExError {
    ExError::from(err).with_source_name(source_name)
}
