use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an expense-sharing group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(i64);

impl GroupId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GroupId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// An expense-sharing group.
///
/// The group itself carries no balances; it only scopes which people
/// and events a settlement computation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_equality() {
        assert_eq!(GroupId::new(1), GroupId::new(1));
        assert_ne!(GroupId::new(1), GroupId::new(2));
    }

    #[test]
    fn test_group_display() {
        assert_eq!(format!("{}", GroupId::new(3)), "3");
    }
}
