//! Value types exchanged with the tracking backend.
//!
//! Everything here arrives read-only from the API. Records whose wire shape
//! carries a `type` discriminant next to several nullable payload fields
//! (persons, bills) are decoded through a wire record and converted into a
//! tagged enum, so a mismatched payload is rejected at the boundary.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub mod bill;
pub mod contact;
pub mod council;
pub mod person;
pub mod power_hour;
pub mod sponsorship;
pub mod user;

pub use bill::{Bill, BillAttachment, BillKind, BillType, CityBill, StateBill, StateBillSearchResult, StateChamberBill};
pub use contact::{OfficeContact, OfficeContactType};
pub use council::CouncilMemberRow;
pub use person::{CouncilMember, Person, PersonType, Role, StateRepresentative};
pub use power_hour::PowerHour;
pub use sponsorship::{Chamber, SingleMemberSponsorship, SponsorList, SponsorRole, StateBillSponsorships};
pub use user::{Staffer, User};

/// A record that decoded as JSON but violates a model invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("person {id} has type {kind:?} but {detail}")]
    RoleMismatch {
        id: String,
        kind: PersonType,
        detail: &'static str,
    },

    #[error("bill {id} has type {kind:?} but {detail}")]
    BillKindMismatch {
        id: String,
        kind: BillType,
        detail: &'static str,
    },

    #[error("person {person_id} appears in more than one sponsor role")]
    OverlappingSponsor { person_id: String },
}

/// Backend string columns are sometimes `null`; the UI treats that as empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
