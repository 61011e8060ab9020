use serde::Serialize;

use crate::domain::contact::Contact;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional last-name search entered by the user.
    pub search: Option<String>,
}

/// A contact together with whether the current search shows it.
#[derive(Debug, Serialize)]
pub struct ContactRow {
    pub contact: Contact,
    pub visible: bool,
}

/// Data required to render the main index template.
#[derive(Debug)]
pub struct IndexPageData {
    /// The full snapshot loaded from the store, in store order.
    pub rows: Vec<ContactRow>,
    /// How many rows match the search; zero shows the placeholder.
    pub visible_count: usize,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
