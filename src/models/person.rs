use serde::{Deserialize, Serialize};

use super::{null_as_empty, ModelError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    CouncilMember,
    Senator,
    AssemblyMember,
    Staffer,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CouncilMember {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub borough: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    /// ISO-formatted datetime.
    pub term_start: String,
    pub term_end: String,
}

/// Shared detail record for senators and assembly members.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateRepresentative {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    pub district: u32,
}

/// Role-specific detail of a person; exactly one per person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    CouncilMember(CouncilMember),
    Senator(StateRepresentative),
    AssemblyMember(StateRepresentative),
    Staffer,
}

impl Role {
    pub fn person_type(&self) -> PersonType {
        match self {
            Role::CouncilMember(_) => PersonType::CouncilMember,
            Role::Senator(_) => PersonType::Senator,
            Role::AssemblyMember(_) => PersonType::AssemblyMember,
            Role::Staffer => PersonType::Staffer,
        }
    }

    /// District details when the person sits in either state chamber.
    pub fn state_representative(&self) -> Option<&StateRepresentative> {
        match self {
            Role::Senator(rep) | Role::AssemblyMember(rep) => Some(rep),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub twitter: String,
    pub party: String,
    pub notes: String,
    pub role: Role,
}

impl Person {
    pub fn person_type(&self) -> PersonType {
        self.role.person_type()
    }
}

/// Wire shape: a `type` discriminant plus three nullable role fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    twitter: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    party: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    notes: String,
    #[serde(rename = "type")]
    kind: PersonType,
    #[serde(default)]
    council_member: Option<CouncilMember>,
    #[serde(default)]
    senator: Option<StateRepresentative>,
    #[serde(default)]
    assembly_member: Option<StateRepresentative>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = ModelError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let mismatch = |detail| ModelError::RoleMismatch {
            id: record.id.clone(),
            kind: record.kind,
            detail,
        };

        let role = match (
            record.kind,
            record.council_member.clone(),
            record.senator.clone(),
            record.assembly_member.clone(),
        ) {
            (PersonType::CouncilMember, Some(member), None, None) => Role::CouncilMember(member),
            (PersonType::Senator, None, Some(rep), None) => Role::Senator(rep),
            (PersonType::AssemblyMember, None, None, Some(rep)) => Role::AssemblyMember(rep),
            (PersonType::Staffer, None, None, None) => Role::Staffer,
            (PersonType::Staffer, ..) => return Err(mismatch("carries role details")),
            (_, None, None, None) => return Err(mismatch("has no role details")),
            _ => return Err(mismatch("carries details for a different role")),
        };

        Ok(Person {
            id: record.id,
            name: record.name,
            title: record.title,
            email: record.email,
            twitter: record.twitter,
            party: record.party,
            notes: record.notes,
            role,
        })
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        let kind = person.person_type();
        let (council_member, senator, assembly_member) = match person.role {
            Role::CouncilMember(member) => (Some(member), None, None),
            Role::Senator(rep) => (None, Some(rep), None),
            Role::AssemblyMember(rep) => (None, None, Some(rep)),
            Role::Staffer => (None, None, None),
        };
        PersonRecord {
            id: person.id,
            name: person.name,
            title: person.title,
            email: person.email,
            twitter: person.twitter,
            party: person.party,
            notes: person.notes,
            kind,
            council_member,
            senator,
            assembly_member,
        }
    }
}
