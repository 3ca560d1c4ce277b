use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller did not present a valid API key.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The request was malformed or contradicts itself.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
