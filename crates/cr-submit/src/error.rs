// error.rs — Submit errors and the uniform result handed back to the form layer.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while selecting a strategy or sending a submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Unknown strategy identifier or unusable endpoint. Fatal, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The config file could not be read or parsed.
    #[error("failed to load config {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// Network failure, library load failure, or an undecodable response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service answered with a non-success status.
    #[error("{service} error: status {status}")]
    RemoteRejection { service: &'static str, status: u16 },
}

pub type Result<T> = std::result::Result<T, SubmitError>;

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SubmitError::Configuration(_) | SubmitError::ConfigLoad { .. } => {
                FailureKind::Configuration
            }
            SubmitError::Transport(_) => FailureKind::Transport,
            SubmitError::RemoteRejection { .. } => FailureKind::RemoteRejection,
        }
    }
}

/// Broad class of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    Transport,
    RemoteRejection,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Configuration => write!(f, "configuration"),
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::RemoteRejection => write!(f, "remote_rejection"),
        }
    }
}

/// Outcome of one submission attempt.
///
/// The form layer only needs `is_success()`; `kind` is there for logs and
/// for callers that want to tell a misconfiguration from a flaky network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// The submission echo, or the service's response body.
    Success { data: serde_json::Value },
    Failure { kind: FailureKind, reason: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SubmissionResult::Success { .. } => None,
            SubmissionResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<SubmitError> for SubmissionResult {
    fn from(err: SubmitError) -> Self {
        SubmissionResult::Failure {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

impl From<Result<serde_json::Value>> for SubmissionResult {
    fn from(result: Result<serde_json::Value>) -> Self {
        match result {
            Ok(data) => SubmissionResult::Success { data },
            Err(err) => err.into(),
        }
    }
}
