use thiserror::Error;

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("migration error: {0}")]
    Migration(String),
    /// A stored row could not be turned into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
