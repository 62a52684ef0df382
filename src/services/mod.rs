//! Service layer: orchestrates repository access for the admin views.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FieldErrors;
use crate::repository::errors::RepositoryError;

pub mod calendar;
pub mod dashboard;
pub mod drivers;
pub mod export;
pub mod insurance;
pub mod vehicles;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    /// Per-field validation messages; blocks submission.
    #[error("Form validation failed")]
    Form(FieldErrors),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
