use crate::core::group::GroupId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person in a group.
///
/// # Examples
///
/// ```
/// use settlement_engine::core::person::PersonId;
///
/// let alice = PersonId::new(1);
/// let bob = PersonId::new(2);
/// assert_ne!(alice, bob);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// A member of an expense-sharing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub group_id: GroupId,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, group_id: GroupId) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group_id,
        }
    }
}
