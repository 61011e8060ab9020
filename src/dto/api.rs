//! DTOs exposed by the phone book JSON endpoints.

use serde::Serialize;

use crate::domain::contact::Contact;

/// Query parameters accepted by the `/api/v1/contacts` service.
#[derive(Debug, Default)]
pub struct ContactsQuery {
    /// Optional last-name search applied to the contact list.
    pub search: Option<String>,
}

/// Loader payload: `{ "items": [...] }`.
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub items: Vec<Contact>,
}

/// Body of every failed JSON response: `{ "error": "<message key>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
