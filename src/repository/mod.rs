use crate::{
    db::{DbConnection, DbPool},
    domain::{
        contact::{Contact, NewContact},
        types::ContactId,
    },
    repository::errors::RepositoryResult,
};

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed data-access handle. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait ContactReader {
    /// Every stored contact, ordered by id.
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    /// Returns the number of removed rows; an unknown id removes nothing.
    fn delete_contact(&self, contact_id: ContactId) -> RepositoryResult<usize>;
}
