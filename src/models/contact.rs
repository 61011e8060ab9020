use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, NewContact as DomainNewContact};
use crate::domain::types::{ContactId, FirstName, LastName, Phone, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`].
pub struct NewContact<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactId::try_from(contact.id)?,
            first_name: FirstName::new(contact.first_name)?,
            last_name: LastName::new(contact.last_name)?,
            phone: Phone::new(contact.phone)?,
        })
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            first_name: contact.first_name.as_str(),
            last_name: contact.last_name.as_str(),
            phone: contact.phone.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_newcontact() {
        let domain = DomainNewContact::new(
            FirstName::new("John").unwrap(),
            LastName::new("Smith").unwrap(),
            Phone::new("555-1111").unwrap(),
        );
        let new: NewContact = (&domain).into();
        assert_eq!(new.first_name, "John");
        assert_eq!(new.last_name, "Smith");
        assert_eq!(new.phone, "555-1111");
    }

    #[test]
    fn contact_into_domain() {
        let db_contact = Contact {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Smythe".to_string(),
            phone: "555-2222".to_string(),
        };
        let domain = DomainContact::try_from(db_contact).unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.first_name.as_str(), "Jane");
        assert_eq!(domain.last_name.as_str(), "Smythe");
        assert_eq!(domain.phone.as_str(), "555-2222");
    }

    #[test]
    fn blank_row_is_rejected() {
        let db_contact = Contact {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: " ".to_string(),
            phone: "555-2222".to_string(),
        };
        assert_eq!(
            DomainContact::try_from(db_contact),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
