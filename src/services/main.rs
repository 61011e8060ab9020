use crate::domain::contact::Contact;
use crate::dto::main::{ContactRow, IndexPageData};
pub use crate::dto::main::IndexQuery;
use crate::forms::main::{IndexAction, IndexActionForm};
use crate::repository::{ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads every contact for the list page, marking which ones the optional
/// search leaves visible.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: ContactReader + ?Sized,
{
    let search_query = query.search.filter(|s| !s.is_empty());

    let contacts = repo.list_contacts().map_err(|err| {
        log::error!("Failed to list contacts: {err}");
        err
    })?;

    let search = search_query.as_deref().unwrap_or("");
    let rows: Vec<ContactRow> = contacts
        .into_iter()
        .map(|contact: Contact| {
            let visible = contact.matches_last_name(search);
            ContactRow { contact, visible }
        })
        .collect();
    let visible_count = rows.iter().filter(|row| row.visible).count();

    Ok(IndexPageData {
        rows,
        visible_count,
        search_query,
    })
}

/// Applies the mutation posted to the list page. At most one store call is
/// made; deleting an id that does not exist is not an error.
pub fn apply_index_action<R>(repo: &R, form: IndexActionForm) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let action = IndexAction::try_from(form).map_err(|err| {
        log::error!("Failed to parse list action: {err}");
        ServiceError::Form(err.to_string())
    })?;

    match action {
        IndexAction::Delete(contact_id) => {
            let removed = repo.delete_contact(contact_id).map_err(|err| {
                log::error!("Failed to delete contact {contact_id}: {err}");
                err
            })?;
            if removed == 0 {
                log::info!("Contact {contact_id} was already gone");
            }
        }
        IndexAction::Ignored => {}
    }

    Ok(())
}
