//! Error kinds reported by repositories and services.

use thiserror::Error;

/// A failure raised by a collaborator (repository, cache or service).
///
/// The variants are tags, not HTTP statuses. The boundary layer decides which
/// status each one becomes, and that decision can differ per endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    /// The data layer rejected the caller's session or credentials.
    #[error("session expired: {0}")]
    SessionExpired(String),

    /// The caller is authenticated but not allowed to see the data.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The caller supplied an argument the collaborator cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("cache error: {0}")]
    Cache(String),
}

impl DataError {
    /// Short machine-readable tag, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionExpired(_) => "session_expired",
            Self::PermissionDenied(_) => "permission_denied",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Database(_) => "database",
            Self::Cache(_) => "cache",
        }
    }
}
