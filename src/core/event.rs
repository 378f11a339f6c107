use crate::core::group::GroupId;
use crate::core::person::PersonId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a shared expense event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// A shared expense inside a group.
///
/// `payer_id` and `amount` are both optional: an event can be recorded
/// before anyone has paid for it, and a zero or missing amount
/// contributes nothing to either side of the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub group_id: GroupId,
    pub title: String,
    /// Who paid for this event, if anyone has yet.
    pub payer_id: Option<PersonId>,
    /// The paid amount. Treated as zero when absent.
    pub amount: Option<Decimal>,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        group_id: GroupId,
        title: impl Into<String>,
        payer_id: Option<PersonId>,
        amount: Option<Decimal>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id,
            title: title.into(),
            payer_id,
            amount,
        }
    }

    /// The event amount, with a missing amount read as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}

/// A person's participation in one event.
///
/// `share` is a relative weight used to prorate the event amount.
/// Missing share means weight 1. Uniqueness per (event, person) is
/// enforced by the data layer, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub event_id: EventId,
    pub person_id: PersonId,
    pub share: Option<Decimal>,
}

impl Participant {
    pub fn new(event_id: EventId, person_id: impl Into<PersonId>, share: Option<Decimal>) -> Self {
        Self {
            event_id,
            person_id: person_id.into(),
            share,
        }
    }

    /// The share weight, defaulting to 1 when unset.
    pub fn share_or_default(&self) -> Decimal {
        self.share.unwrap_or(Decimal::ONE)
    }
}
