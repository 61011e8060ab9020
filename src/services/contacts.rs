use crate::domain::contact::{Contact, NewContact};
use crate::forms::contacts::AddContactForm;
use crate::repository::ContactWriter;
use crate::services::{ServiceError, ServiceResult};

/// Message shown when the create form is missing a field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";

/// Validates the add-contact form and persists a new contact record.
pub fn add_contact<R>(repo: &R, form: AddContactForm) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    let new_contact = NewContact::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let contact = repo.create_contact(&new_contact).map_err(|err| {
        log::error!("Failed to add a contact: {err}");
        err
    })?;

    log::info!("Added contact {}", contact.id);
    Ok(contact)
}
