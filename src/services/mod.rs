use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod contacts;
pub mod main;

/// Errors returned by the service layer to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted data did not pass parse-and-validate; nothing was stored.
    #[error("form error: {0}")]
    Form(String),

    /// Unexpected store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
