use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_string_from_number;

use super::{null_as_empty, Chamber, ModelError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillType {
    City,
    State,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityBill {
    pub status: String,
    pub file: String,
    pub city_bill_id: i64,
    /// Committee name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub council_body: String,
    pub sponsor_count: u32,
}

/// One chamber's version of a state bill.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateChamberBill {
    pub base_print_no: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub active_version: String,
    pub status: String,
    pub sponsor_count: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub senate_website: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assembly_website: String,
}

impl StateChamberBill {
    /// Print number with the active amendment letter, e.g. `S1234A`.
    pub fn print_no(&self) -> String {
        format!("{}{}", self.base_print_no, self.active_version)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateBill {
    pub session_year: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub senate_bill: Option<StateChamberBill>,
    #[serde(default)]
    pub assembly_bill: Option<StateChamberBill>,
}

impl StateBill {
    /// Chamber versions that exist, senate first.
    pub fn chamber_bills(&self) -> impl Iterator<Item = (Chamber, &StateChamberBill)> {
        [
            (Chamber::Senate, self.senate_bill.as_ref()),
            (Chamber::Assembly, self.assembly_bill.as_ref()),
        ]
        .into_iter()
        .filter_map(|(chamber, bill)| bill.map(|bill| (chamber, bill)))
    }

    pub fn chamber_bill(&self, chamber: Chamber) -> Option<&StateChamberBill> {
        match chamber {
            Chamber::Senate => self.senate_bill.as_ref(),
            Chamber::Assembly => self.assembly_bill.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillKind {
    City(CityBill),
    State(StateBill),
}

impl BillKind {
    pub fn bill_type(&self) -> BillType {
        match self {
            BillKind::City(_) => BillType::City,
            BillKind::State(_) => BillType::State,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "BillRecord", into = "BillRecord")]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tracked: bool,
    pub code_name: String,
    pub status: String,

    pub notes: String,
    pub nickname: String,
    pub twitter_search_terms: Vec<String>,

    pub kind: BillKind,
}

impl Bill {
    pub fn bill_type(&self) -> BillType {
        self.kind.bill_type()
    }

    /// Nickname when one was given, otherwise the official name.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.name
        } else {
            &self.nickname
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct BillRecord {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default)]
    tracked: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    code_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    notes: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    nickname: String,
    #[serde(default)]
    twitter_search_terms: Vec<String>,
    #[serde(rename = "type")]
    kind: BillType,
    #[serde(default)]
    city_bill: Option<CityBill>,
    #[serde(default)]
    state_bill: Option<StateBill>,
}

impl TryFrom<BillRecord> for Bill {
    type Error = ModelError;

    fn try_from(record: BillRecord) -> Result<Self, Self::Error> {
        let kind = match (record.kind, record.city_bill, record.state_bill) {
            (BillType::City, Some(city), None) => BillKind::City(city),
            (BillType::State, None, Some(state)) => BillKind::State(state),
            (kind, city, state) => {
                let detail = match (city.is_some(), state.is_some()) {
                    (true, true) => "carries both city and state details",
                    (false, false) => "carries no bill details",
                    _ => "carries details for the other bill type",
                };
                return Err(ModelError::BillKindMismatch {
                    id: record.id,
                    kind,
                    detail,
                });
            }
        };

        Ok(Bill {
            id: record.id,
            name: record.name,
            description: record.description,
            tracked: record.tracked,
            code_name: record.code_name,
            status: record.status,
            notes: record.notes,
            nickname: record.nickname,
            twitter_search_terms: record.twitter_search_terms,
            kind,
        })
    }
}

impl From<Bill> for BillRecord {
    fn from(bill: Bill) -> Self {
        let kind = bill.bill_type();
        let (city_bill, state_bill) = match bill.kind {
            BillKind::City(city) => (Some(city), None),
            BillKind::State(state) => (None, Some(state)),
        };
        BillRecord {
            id: bill.id,
            name: bill.name,
            description: bill.description,
            tracked: bill.tracked,
            code_name: bill.code_name,
            status: bill.status,
            notes: bill.notes,
            nickname: bill.nickname,
            twitter_search_terms: bill.twitter_search_terms,
            kind,
            city_bill,
            state_bill,
        }
    }
}

/// A state bill as returned by the state legislature search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateBillSearchResult {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: String,
    pub base_print_no: String,
    pub session_year: i32,
    pub chamber: Chamber,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub active_version: String,
    pub tracked: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillAttachment {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub bill_id: String,
    pub url: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}
