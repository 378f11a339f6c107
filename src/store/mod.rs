//! Read seam between the settlement engine and whatever owns the data.
//!
//! The engine never writes; it performs a bounded sequence of reads per
//! settlement call and computes purely from the snapshot those reads
//! return. Persistence, caching, and retry policy all live behind this
//! trait.

use crate::core::event::{Event, EventId, Participant};
use crate::core::group::{Group, GroupId};
use crate::core::person::Person;
use thiserror::Error;

pub mod memory;

/// Failure reading from the data layer.
///
/// Distinct from a group simply not existing; a read failure aborts
/// the settlement computation with no partial result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data read failed: {0}")]
    ReadFailed(String),
}

/// Read-only access to groups, people, events, and participants.
pub trait ExpenseStore {
    /// Resolve a group by id. `Ok(None)` means the group does not exist.
    fn group(&self, group_id: GroupId) -> Result<Option<Group>, StoreError>;

    /// All people belonging to the group.
    fn people_in_group(&self, group_id: GroupId) -> Result<Vec<Person>, StoreError>;

    /// All events recorded against the group.
    fn events_in_group(&self, group_id: GroupId) -> Result<Vec<Event>, StoreError>;

    /// All participants of one event.
    fn participants_for_event(&self, event_id: EventId) -> Result<Vec<Participant>, StoreError>;
}
