//! Fault taxonomy for the export run.
//!
//! Every failure the exporter can hit while talking to the Piwik API or writing
//! language files is an [`ExportError`]. Each variant maps to a [`FaultKind`],
//! which drives both the retry decision and the per-language failure policy.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Connection failures, timeouts, 5xx and 429 responses. Worth retrying.
    TransientNetwork,
    /// The API answered, but not with something we can use.
    MalformedResponse,
    /// Writing a language file failed.
    Filesystem,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::TransientNetwork => "transient-network",
            FaultKind::MalformedResponse => "malformed-response",
            FaultKind::Filesystem => "filesystem",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to send request for {method}: {source}")]
    Request {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Piwik API error for {method} ({status}): {body}")]
    Status {
        method: String,
        status: u16,
        body: String,
    },

    #[error("Piwik API returned an error for {method}: {message}")]
    Api { method: String, message: String },

    #[error("Failed to parse response for {method}: {reason}")]
    Decode { method: String, reason: String },

    #[error("Invalid language code {0:?}")]
    InvalidLanguageCode(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn kind(&self) -> FaultKind {
        match self {
            ExportError::Request { .. } => FaultKind::TransientNetwork,
            ExportError::Status { status, .. } if *status >= 500 || *status == 429 => {
                FaultKind::TransientNetwork
            }
            ExportError::Status { .. }
            | ExportError::Api { .. }
            | ExportError::Decode { .. }
            | ExportError::InvalidLanguageCode(_) => FaultKind::MalformedResponse,
            ExportError::Write { .. } => FaultKind::Filesystem,
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        self.kind() == FaultKind::TransientNetwork
    }
}
