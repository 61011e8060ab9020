use serde::Deserialize;

use crate::{domain::types::ContactId, forms::FormError};

/// Raw body of a `POST /` submission.
#[derive(Debug, Default, Deserialize)]
pub struct IndexActionForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Parsed mutation requested from the list page.
#[derive(Debug, PartialEq, Eq)]
pub enum IndexAction {
    Delete(ContactId),
    /// Unrecognized or missing `action`; nothing is changed.
    Ignored,
}

impl TryFrom<IndexActionForm> for IndexAction {
    type Error = FormError;

    fn try_from(form: IndexActionForm) -> Result<Self, Self::Error> {
        match form.action.as_deref() {
            Some("delete") => {
                let id = form
                    .id
                    .as_deref()
                    .map(str::trim)
                    .and_then(|raw| raw.parse::<i32>().ok())
                    .ok_or(FormError::InvalidId)?;
                let id = ContactId::new(id).map_err(|_| FormError::InvalidId)?;
                Ok(IndexAction::Delete(id))
            }
            _ => Ok(IndexAction::Ignored),
        }
    }
}
