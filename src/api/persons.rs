use urlencoding::encode;

use super::{fetch_json, FetchError, Fetcher};
use crate::models::{OfficeContact, Person};

/// `person_id` is encoded as a single path segment.
pub fn person_path(person_id: &str) -> String {
    format!("/api/persons/{}", encode(person_id))
}

pub fn contacts_path(person_id: &str) -> String {
    format!("{}/contacts", person_path(person_id))
}

pub async fn get_person(fetcher: &dyn Fetcher, person_id: &str) -> Result<Person, FetchError> {
    fetch_json(fetcher, &person_path(person_id)).await
}

pub async fn get_person_contacts(
    fetcher: &dyn Fetcher,
    person_id: &str,
) -> Result<Vec<OfficeContact>, FetchError> {
    fetch_json(fetcher, &contacts_path(person_id)).await
}
