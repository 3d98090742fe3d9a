//! Lookup error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validators::OrcidErrorKind;

/// Coarse failure category shared with the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorKind {
    Format,
    Checksum,
    NotFound,
    ApiError,
    Timeout,
    Network,
    Unknown,
}

/// Failure of a network-backed identifier lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input is structurally not an identifier of the requested kind
    #[error("Invalid format: {0}")]
    Format(String),

    /// ORCID iD failed the MOD 11-2 check
    #[error("Invalid checksum: {0}")]
    Checksum(String),

    /// Service answered but has no record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service answered with an error status
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Connection-level failure
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Format(_) => LookupErrorKind::Format,
            LookupError::Checksum(_) => LookupErrorKind::Checksum,
            LookupError::NotFound(_) => LookupErrorKind::NotFound,
            LookupError::ApiError { .. } => LookupErrorKind::ApiError,
            LookupError::Timeout(_) => LookupErrorKind::Timeout,
            LookupError::Network(_) => LookupErrorKind::Network,
            LookupError::Unknown(_) => LookupErrorKind::Unknown,
        }
    }

    /// Transient failures that may succeed on another attempt.
    ///
    /// Format and checksum failures are properties of the input and never
    /// retryable; a missing record stays missing.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LookupError::Timeout(_) | LookupError::Network(_) | LookupError::ApiError { .. }
        )
    }
}

impl From<OrcidErrorKind> for LookupErrorKind {
    fn from(kind: OrcidErrorKind) -> Self {
        match kind {
            OrcidErrorKind::Format => LookupErrorKind::Format,
            OrcidErrorKind::Checksum => LookupErrorKind::Checksum,
        }
    }
}
