use crate::domain::contact::filter_by_last_name;
pub use crate::dto::api::{ContactsQuery, ContactsResponse};
use crate::repository::ContactReader;
use crate::services::ServiceResult;

/// Returns the contacts whose last name matches the optional search.
pub fn list_contacts<R>(repo: &R, params: ContactsQuery) -> ServiceResult<ContactsResponse>
where
    R: ContactReader + ?Sized,
{
    let contacts = repo.list_contacts().map_err(|err| {
        log::error!("Failed to list contacts: {err}");
        err
    })?;

    let search = params.search.filter(|s| !s.is_empty());

    let items = match search {
        Some(term) => filter_by_last_name(&contacts, &term),
        None => contacts,
    };

    Ok(ContactsResponse { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Contact;
    use crate::domain::types::{ContactId, FirstName, LastName, Phone};
    use crate::repository::mock::MockRepository;

    fn stored() -> Vec<Contact> {
        [(1, "John", "Smith"), (2, "Jane", "Smythe")]
            .into_iter()
            .map(|(id, first, last)| {
                Contact::new(
                    ContactId::new(id).unwrap(),
                    FirstName::new(first).unwrap(),
                    LastName::new(last).unwrap(),
                    Phone::new(format!("555-{id}{id}{id}{id}")).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn lists_all_without_search() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts().times(1).returning(|| Ok(stored()));

        let response = list_contacts(&repo, ContactsQuery::default()).unwrap();

        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn search_filters_on_last_name() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts().times(1).returning(|| Ok(stored()));

        let params = ContactsQuery {
            search: Some("SMIT".to_string()),
        };
        let response = list_contacts(&repo, params).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id.get(), 1);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts().times(1).returning(|| {
            Ok(vec![
                Contact::new(
                    ContactId::new(1).unwrap(),
                    FirstName::new("Dick").unwrap(),
                    LastName::new("Van Dyke").unwrap(),
                    Phone::new("555-0001").unwrap(),
                ),
                Contact::new(
                    ContactId::new(2).unwrap(),
                    FirstName::new("Cornelius").unwrap(),
                    LastName::new("Vanderbilt").unwrap(),
                    Phone::new("555-0002").unwrap(),
                ),
            ])
        });

        let params = ContactsQuery {
            search: Some("van ".to_string()),
        };
        let response = list_contacts(&repo, params).unwrap();

        let ids: Vec<i32> = response.items.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn payload_uses_wire_field_names() {
        let response = ContactsResponse {
            items: stored().into_iter().take(1).collect(),
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "items": [
                    {"id": 1, "firstName": "John", "lastName": "Smith", "phone": "555-1111"}
                ]
            })
        );
    }
}
