use serde::{Deserialize, Serialize};

use super::{null_as_empty, OfficeContact};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub can_be_deleted: bool,
    pub send_bill_update_notifications: bool,
}

/// Staff directory entry; independent of the person graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Staffer {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub office_contacts: Vec<OfficeContact>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter: String,
}
