//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown when the calculator could not be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "An unexpected error occurred. Is the backend server running?";

/// Errors emitted by a `ProgressionApi`.
///
/// The display text of each variant is what the user sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalculationError {
    /// The calculator answered with an error payload.
    #[error("{message}")]
    Rejected { message: String },
    /// No response was received.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
}

impl CalculationError {
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Errors emitted by the submission workflows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkflowError {
    #[error("a calculation is already in progress")]
    InFlight,
}

/// Errors emitted while loading `ProgressionConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid calculator base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("calculator base url must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error("invalid request timeout {raw:?}")]
    InvalidTimeout { raw: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ReportExporter`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
