use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Bill, ModelError, Person};

/// One of the two state legislative bodies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chamber {
    Senate,
    Assembly,
}

impl Chamber {
    pub fn label(self) -> &'static str {
        match self {
            Chamber::Senate => "Senate",
            Chamber::Assembly => "Assembly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorRole {
    Lead,
    Cosponsor,
    NonSponsor,
}

/// Sponsorship partition of one chamber's members for a bill.
///
/// A person holds at most one role; lists that break this are rejected
/// when decoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "SponsorListRecord", into = "SponsorListRecord")]
pub struct SponsorList {
    lead_sponsor: Option<Person>,
    cosponsors: Vec<Person>,
    non_sponsors: Vec<Person>,
}

impl SponsorList {
    pub fn new(
        lead_sponsor: Option<Person>,
        cosponsors: Vec<Person>,
        non_sponsors: Vec<Person>,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for person in lead_sponsor.iter().chain(&cosponsors).chain(&non_sponsors) {
            if !seen.insert(person.id.as_str()) {
                return Err(ModelError::OverlappingSponsor {
                    person_id: person.id.clone(),
                });
            }
        }
        Ok(Self {
            lead_sponsor,
            cosponsors,
            non_sponsors,
        })
    }

    pub fn lead_sponsor(&self) -> Option<&Person> {
        self.lead_sponsor.as_ref()
    }

    pub fn cosponsors(&self) -> &[Person] {
        &self.cosponsors
    }

    pub fn non_sponsors(&self) -> &[Person] {
        &self.non_sponsors
    }

    pub fn role_of(&self, person_id: &str) -> Option<SponsorRole> {
        let holds = |people: &[Person]| people.iter().any(|p| p.id == person_id);
        if self.lead_sponsor.as_ref().is_some_and(|p| p.id == person_id) {
            Some(SponsorRole::Lead)
        } else if holds(&self.cosponsors) {
            Some(SponsorRole::Cosponsor)
        } else if holds(&self.non_sponsors) {
            Some(SponsorRole::NonSponsor)
        } else {
            None
        }
    }

    /// Lead sponsor plus cosponsors.
    pub fn sponsor_count(&self) -> usize {
        usize::from(self.lead_sponsor.is_some()) + self.cosponsors.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct SponsorListRecord {
    #[serde(default)]
    lead_sponsor: Option<Person>,
    #[serde(default)]
    cosponsors: Vec<Person>,
    #[serde(default)]
    non_sponsors: Vec<Person>,
}

impl TryFrom<SponsorListRecord> for SponsorList {
    type Error = ModelError;

    fn try_from(record: SponsorListRecord) -> Result<Self, Self::Error> {
        SponsorList::new(record.lead_sponsor, record.cosponsors, record.non_sponsors)
    }
}

impl From<SponsorList> for SponsorListRecord {
    fn from(list: SponsorList) -> Self {
        SponsorListRecord {
            lead_sponsor: list.lead_sponsor,
            cosponsors: list.cosponsors,
            non_sponsors: list.non_sponsors,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateBillSponsorships {
    pub bill_id: String,
    pub senate_sponsorships: SponsorList,
    pub assembly_sponsorships: SponsorList,
}

impl StateBillSponsorships {
    pub fn for_chamber(&self, chamber: Chamber) -> &SponsorList {
        match chamber {
            Chamber::Senate => &self.senate_sponsorships,
            Chamber::Assembly => &self.assembly_sponsorships,
        }
    }
}

/// A bill one particular person sponsors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SingleMemberSponsorship {
    pub bill: Bill,
    pub person_id: String,
}
