use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfficeContactType {
    CentralOffice,
    DistrictOffice,
    Other,
}

/// An office belonging to a person or staffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OfficeContact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(rename = "type")]
    pub kind: OfficeContactType,
    #[serde(default)]
    pub city: Option<String>,
}
