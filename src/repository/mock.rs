//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::ContactId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactReader, ContactWriter};

mock! {
    pub Repository {}

    impl ContactReader for Repository {
        fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn delete_contact(&self, contact_id: ContactId) -> RepositoryResult<usize>;
    }
}
