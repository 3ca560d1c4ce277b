//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls connecting them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

#[cfg(feature = "server")]
use crate::forms::categories::CategoryFormError;
#[cfg(feature = "server")]
use crate::forms::movies::MovieFormError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::BadRequest(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        ServiceError::BadRequest(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<MovieFormError> for ServiceError {
    fn from(val: MovieFormError) -> Self {
        ServiceError::BadRequest(val.to_string())
    }
}
