//! Repository implementation for phone book contacts.

use diesel::prelude::*;

use crate::{
    domain::{
        contact::{Contact, NewContact},
        types::ContactId,
    },
    models::contact::{Contact as DbContact, NewContact as DbNewContact},
    repository::{
        ContactReader, ContactWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ContactReader for DieselRepository {
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let items = contacts::table
            .order(contacts::id.asc())
            .select(DbContact::as_select())
            .load::<DbContact>(&mut conn)?;

        items
            .into_iter()
            .map(|contact| Contact::try_from(contact).map_err(RepositoryError::from))
            .collect()
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let db_new_contact: DbNewContact = new_contact.into();

        let created = diesel::insert_into(contacts::table)
            .values(&db_new_contact)
            .returning(DbContact::as_returning())
            .get_result::<DbContact>(&mut conn)?;

        let contact = Contact::try_from(created).map_err(RepositoryError::from)?;
        Ok(contact)
    }

    fn delete_contact(&self, contact_id: ContactId) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let affected = diesel::delete(contacts::table.find(contact_id.get())).execute(&mut conn)?;
        Ok(affected)
    }
}
