//! Shared error type across tagmetrics crates.

use thiserror::Error;

use crate::kind::MetricKind;

/// Stable error codes, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Instrument exists under a different kind.
    UnexpectedKind,
    /// Config rejected by parsing or validation.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// I/O or other internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedKind => "UNEXPECTED_KIND",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and recorder.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("unexpected instrument kind: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: MetricKind,
        found: MetricKind,
    },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::UnexpectedKind { .. } => ErrorCode::UnexpectedKind,
            MetricsError::BadConfig(_) => ErrorCode::BadConfig,
            MetricsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
