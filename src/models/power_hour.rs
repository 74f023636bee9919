use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_string_from_number;

/// A scheduled review session backed by a spreadsheet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PowerHour {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub bill_id: String,
    pub spreadsheet_url: String,
    pub title: String,
    /// ISO datetime, rendered as received.
    pub created_at: String,
}
