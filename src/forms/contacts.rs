use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        contact::NewContact,
        types::{FirstName, LastName, Phone},
    },
    forms::FormError,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data submitted from the create view. Absent fields arrive empty.
pub struct AddContactForm {
    #[serde(rename = "firstName", default)]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub phone: String,
}

impl TryFrom<AddContactForm> for NewContact {
    type Error = FormError;

    fn try_from(form: AddContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let first_name = FirstName::new(form.first_name).map_err(|_| FormError::InvalidName)?;
        let last_name = LastName::new(form.last_name).map_err(|_| FormError::InvalidName)?;
        let phone = Phone::new(form.phone).map_err(|_| FormError::InvalidPhone)?;

        Ok(NewContact::new(first_name, last_name, phone))
    }
}
