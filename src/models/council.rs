use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_string_from_number;

use super::null_as_empty;

/// Row returned by `GET /council-members`.
///
/// Flat and snake_case, unlike the `councilMember` detail nested in
/// [`Person`](super::Person).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CouncilMemberRow {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub term_start: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub term_end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_is_read_as_string() {
        let row: CouncilMemberRow = serde_json::from_value(json!({
            "id": 7,
            "name": "A Member",
            "term_start": "2022-01-01",
            "term_end": null
        }))
        .unwrap();
        assert_eq!(row.id, "7");
        assert_eq!(row.term_end, "");
    }
}
