//! Error types for repository operations.
//!
//! Only infrastructure-level failures surface here. Absence of data (an
//! unknown job, an empty schedule, no field mappings) is a valid result and
//! is reported as `Option::None` / an empty collection, never as an error.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}
