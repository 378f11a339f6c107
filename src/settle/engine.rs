use crate::core::event::{EventId, Participant};
use crate::core::group::GroupId;
use crate::settle::balance::{BalanceSheet, PersonSummary};
use crate::settle::simplify::{simplify, Transaction};
use crate::store::{ExpenseStore, StoreError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Failure of a settlement computation.
#[derive(Debug, Error)]
pub enum SettleError {
    /// The group id did not resolve. A client-facing condition.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),
    /// The data layer failed mid-read. Never retried here.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Full result of a settlement computation: per-person summaries in
/// ascending person-id order plus the transactions that settle them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    pub people: Vec<PersonSummary>,
    pub transactions: Vec<Transaction>,
}

/// The settlement engine.
///
/// Stateless per call: each settlement performs a bounded sequence of
/// reads from the store, then computes purely over that snapshot.
/// Results are recomputed from scratch every time; two calls over an
/// unchanged store return identical output.
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
/// store.add_event(Event::new(10, gid, "Dinner", Some(PersonId::new(1)), Some(dec!(30))));
/// store.add_participant(Participant::new(EventId::new(10), 1, None));
/// store.add_participant(Participant::new(EventId::new(10), 2, None));
///
/// let engine = SettlementEngine::new(store);
/// let txns = engine.settle(gid).unwrap();
/// assert_eq!(txns.len(), 1);
/// assert_eq!(txns[0].amount, dec!(15.00));
/// ```
pub struct SettlementEngine<S> {
    store: S,
}

impl<S: ExpenseStore> SettlementEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compute the transactions that settle a group.
    ///
    /// Fails with [`SettleError::GroupNotFound`] when the group does
    /// not resolve, or propagates a store read failure. Never returns
    /// a partial result.
    pub fn settle(&self, group_id: GroupId) -> Result<Vec<Transaction>, SettleError> {
        Ok(self.settle_detailed(group_id)?.transactions)
    }

    /// Compute per-person summaries plus settling transactions.
    pub fn settle_detailed(&self, group_id: GroupId) -> Result<SettlementReport, SettleError> {
        let group = self
            .store
            .group(group_id)?
            .ok_or(SettleError::GroupNotFound(group_id))?;

        let people = self.store.people_in_group(group_id)?;
        let events = self.store.events_in_group(group_id)?;

        let mut participants_by_event: HashMap<EventId, Vec<Participant>> = HashMap::new();
        for event in &events {
            participants_by_event.insert(event.id, self.store.participants_for_event(event.id)?);
        }

        debug!(
            "settling group {} ({}): {} people, {} events",
            group_id,
            group.name,
            people.len(),
            events.len()
        );

        let sheet = BalanceSheet::aggregate(&people, &events, &participants_by_event);
        let transactions = simplify(&sheet);

        debug!(
            "group {}: {} balances, {} transactions",
            group_id,
            sheet.len(),
            transactions.len()
        );

        Ok(SettlementReport {
            people: sheet.into_summaries(),
            transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Event;
    use crate::core::group::Group;
    use crate::core::person::{Person, PersonId};
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;

    fn trip_store() -> (MemoryStore, GroupId) {
        let mut store = MemoryStore::new();
        let gid = GroupId::new(1);
        store.add_group(Group::new(gid, "Trip"));
        store.add_person(Person::new(1, "Alice", gid));
        store.add_person(Person::new(2, "Bob", gid));
        store.add_person(Person::new(3, "Carol", gid));
        store.add_event(Event::new(
            10,
            gid,
            "Dinner",
            Some(PersonId::new(1)),
            Some(dec!(30.00)),
        ));
        for pid in 1..=3 {
            store.add_participant(Participant::new(EventId::new(10), pid, None));
        }
        (store, gid)
    }

    #[test]
    fn test_settle_equal_split() {
        let (store, gid) = trip_store();
        let engine = SettlementEngine::new(store);
        let txns = engine.settle(gid).unwrap();

        assert_eq!(txns.len(), 2);
        for t in &txns {
            assert_eq!(t.to_id, PersonId::new(1));
            assert_eq!(t.to_name, "Alice");
            assert_eq!(t.amount, dec!(10.00));
        }
    }

    #[test]
    fn test_settle_detailed_summaries() {
        let (store, gid) = trip_store();
        let engine = SettlementEngine::new(store);
        let report = engine.settle_detailed(gid).unwrap();

        assert_eq!(report.people.len(), 3);
        assert_eq!(report.people[0].name, "Alice");
        assert_eq!(report.people[0].paid, dec!(30.00));
        assert_eq!(report.people[0].owed, dec!(10.00));
        assert_eq!(report.people[0].balance, dec!(20.00));
        assert_eq!(report.people[1].balance, dec!(-10.00));
    }

    #[test]
    fn test_unknown_group_fails() {
        let engine = SettlementEngine::new(MemoryStore::new());
        let err = engine.settle(GroupId::new(42)).unwrap_err();
        assert!(matches!(err, SettleError::GroupNotFound(_)));
        assert_eq!(err.to_string(), "group not found: 42");
    }

    #[test]
    fn test_empty_group_settles_to_nothing() {
        let mut store = MemoryStore::new();
        let gid = GroupId::new(1);
        store.add_group(Group::new(gid, "Empty"));
        let engine = SettlementEngine::new(store);
        let report = engine.settle_detailed(gid).unwrap();
        assert!(report.people.is_empty());
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let (store, gid) = trip_store();
        let engine = SettlementEngine::new(store);
        let first = engine.settle(gid).unwrap();
        let second = engine.settle(gid).unwrap();
        assert_eq!(first, second);
    }
}
