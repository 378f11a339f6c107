//! Random group generation.
//!
//! Builds in-memory groups with random events and participant shares
//! to exercise the aggregator and simplifier at scale.

use crate::core::event::{Event, EventId, Participant};
use crate::core::group::{Group, GroupId};
use crate::core::person::{Person, PersonId};
use crate::store::memory::MemoryStore;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Configuration for generating a random group.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Number of people in the group.
    pub person_count: usize,
    /// Number of events to generate.
    pub event_count: usize,
    /// Minimum event amount.
    pub min_amount: Decimal,
    /// Maximum event amount.
    pub max_amount: Decimal,
    /// Use random integer share weights 1..=5 instead of equal splits.
    pub weighted_shares: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            person_count: 10,
            event_count: 30,
            min_amount: Decimal::from(5),
            max_amount: Decimal::from(500),
            weighted_shares: false,
        }
    }
}

/// Generate a random group in a fresh [`MemoryStore`].
///
/// Every event has a payer and at least two participants drawn from
/// the group. Returns the store together with the generated group id.
pub fn generate_random_group(config: &GroupConfig) -> (MemoryStore, GroupId) {
    let mut rng = rand::thread_rng();
    let mut store = MemoryStore::new();
    let gid = GroupId::new(1);
    store.add_group(Group::new(gid, "generated"));

    let people: Vec<PersonId> = (0..config.person_count)
        .map(|i| {
            let id = PersonId::new(i as i64 + 1);
            store.add_person(Person::new(id.as_i64(), format!("person-{:03}", i + 1), gid));
            id
        })
        .collect();

    let min_cents = (config.min_amount * Decimal::from(100)).to_i64().unwrap_or(500);
    let max_cents = (config.max_amount * Decimal::from(100)).to_i64().unwrap_or(50_000);

    for n in 0..config.event_count {
        let eid = EventId::new(n as i64 + 1);
        let payer = people[rng.gen_range(0..people.len())];
        let amount = Decimal::new(rng.gen_range(min_cents..=max_cents), 2);
        store.add_event(Event::new(
            eid.as_i64(),
            gid,
            format!("event-{:03}", n + 1),
            Some(payer),
            Some(amount),
        ));

        let participant_count = rng.gen_range(2..=people.len().max(2)).min(people.len());
        let mut pool = people.clone();
        for _ in 0..participant_count {
            let idx = rng.gen_range(0..pool.len());
            let person = pool.swap_remove(idx);
            let share = if config.weighted_shares {
                Some(Decimal::from(rng.gen_range(1..=5)))
            } else {
                None
            };
            store.add_participant(Participant::new(eid, person.as_i64(), share));
        }
    }

    (store, gid)
}
