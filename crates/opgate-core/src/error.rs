//! Shared error type across opgate crates.
//!
//! The const decision functions never fail; these errors belong to the
//! surrounding build step (config loading, manifests, output files).

use thiserror::Error;

/// Stable error codes, printed by the CLI and matched by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or inconsistent configuration.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Operator name outside the `namespace::name` form.
    InvalidOperatorName,
    /// Dispatch key not in the known enumeration.
    UnknownDispatchKey,
    /// Filesystem failure.
    Io,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::InvalidOperatorName => "INVALID_OPERATOR_NAME",
            ErrorCode::UnknownDispatchKey => "UNKNOWN_DISPATCH_KEY",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OpgateError>;

/// Unified error type used by core and the build step.
#[derive(Debug, Error)]
pub enum OpgateError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid operator name: {0} (expected namespace::name)")]
    InvalidOperatorName(String),
    #[error("unknown dispatch key: {0}")]
    UnknownDispatchKey(String),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl OpgateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OpgateError::BadConfig(_) => ErrorCode::BadConfig,
            OpgateError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            OpgateError::InvalidOperatorName(_) => ErrorCode::InvalidOperatorName,
            OpgateError::UnknownDispatchKey(_) => ErrorCode::UnknownDispatchKey,
            OpgateError::Io(_) => ErrorCode::Io,
            OpgateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
