use crate::core::event::{Event, EventId, Participant};
use crate::core::group::{Group, GroupId};
use crate::core::person::Person;
use crate::store::{ExpenseStore, StoreError};
use std::collections::HashMap;

/// In-memory `ExpenseStore`.
///
/// Backs the CLI, the random group generator, and tests. Reads are
/// infallible here; the trait's error channel exists for real data
/// layers.
///
/// # Examples
///
/// ```
/// use settlement_engine::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let mut store = MemoryStore::new();
/// let gid = GroupId::new(1);
/// store.add_group(Group::new(gid, "Trip"));
/// store.add_person(Person::new(1, "Alice", gid));
/// store.add_person(Person::new(2, "Bob", gid));
///
/// let event = Event::new(10, gid, "Dinner", Some(PersonId::new(1)), Some(dec!(30)));
/// store.add_event(event);
/// store.add_participant(Participant::new(EventId::new(10), 1, None));
/// store.add_participant(Participant::new(EventId::new(10), 2, None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    groups: HashMap<GroupId, Group>,
    people: Vec<Person>,
    events: Vec<Event>,
    participants: HashMap<EventId, Vec<Participant>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, group: Group) {
        self.groups.insert(group.id, group);
    }

    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants
            .entry(participant.event_id)
            .or_default()
            .push(participant);
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl ExpenseStore for MemoryStore {
    fn group(&self, group_id: GroupId) -> Result<Option<Group>, StoreError> {
        Ok(self.groups.get(&group_id).cloned())
    }

    fn people_in_group(&self, group_id: GroupId) -> Result<Vec<Person>, StoreError> {
        Ok(self
            .people
            .iter()
            .filter(|p| p.group_id == group_id)
            .cloned()
            .collect())
    }

    fn events_in_group(&self, group_id: GroupId) -> Result<Vec<Event>, StoreError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }

    fn participants_for_event(&self, event_id: EventId) -> Result<Vec<Participant>, StoreError> {
        Ok(self.participants.get(&event_id).cloned().unwrap_or_default())
    }
}
