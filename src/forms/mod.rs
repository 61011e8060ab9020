//! Form definitions backing the phone book routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod contacts;
pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid contact id")]
    InvalidId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid phone number")]
    InvalidPhone,
}
