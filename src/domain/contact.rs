use serde::Serialize;

use crate::domain::types::{ContactId, FirstName, LastName, Phone};

/// A phone book entry as stored.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub phone: Phone,
}

impl Contact {
    #[must_use]
    pub fn new(id: ContactId, first_name: FirstName, last_name: LastName, phone: Phone) -> Self {
        Self {
            id,
            first_name,
            last_name,
            phone,
        }
    }

    /// Case-insensitive substring match on the last name. An empty search
    /// matches every contact.
    pub fn matches_last_name(&self, search: &str) -> bool {
        search.is_empty()
            || self
                .last_name
                .to_lowercase()
                .contains(&search.to_lowercase())
    }
}

/// Payload for inserting a contact; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub phone: Phone,
}

impl NewContact {
    #[must_use]
    pub fn new(first_name: FirstName, last_name: LastName, phone: Phone) -> Self {
        Self {
            first_name,
            last_name,
            phone,
        }
    }
}

/// Derives the visible subset of `contacts` for `search`, keeping the
/// original order. The input snapshot is never modified, so the result can
/// be recomputed from scratch on every change of `search`.
pub fn filter_by_last_name(contacts: &[Contact], search: &str) -> Vec<Contact> {
    let needle = search.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.last_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
