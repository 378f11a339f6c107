use crate::core::event::{Event, EventId, Participant};
use crate::core::money::{round2, share_amount};
use crate::core::person::{Person, PersonId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-person totals for one settlement computation.
///
/// `balance = paid − owed`. Positive means the group owes this person,
/// negative means they owe the group. All three amounts carry a fixed
/// scale of 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub person_id: PersonId,
    pub name: String,
    pub paid: Decimal,
    pub owed: Decimal,
    pub balance: Decimal,
}

/// The aggregated balance position of every person touched by a
/// group's events, ordered by ascending person id.
///
/// Produced fresh on every settlement call; nothing here persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    summaries: Vec<PersonSummary>,
}

impl BalanceSheet {
    /// Compute paid/owed/balance for a group snapshot.
    ///
    /// # Algorithm
    ///
    /// 1. Every person in the group starts at paid = owed = 0.
    /// 2. Each event with a payer and an amount credits the payer's paid.
    /// 3. Each event's amount is prorated across its participants by
    ///    share weight (missing share reads as 1). If the shares sum to
    ///    zero, the participant count substitutes as the divisor.
    /// 4. balance = round2(paid − owed).
    ///
    /// People who appear only as a payer or a participant still get an
    /// entry; their name falls back to the id when the group's people
    /// list never named them.
    pub fn aggregate(
        people: &[Person],
        events: &[Event],
        participants_by_event: &HashMap<EventId, Vec<Participant>>,
    ) -> Self {
        let mut paid: BTreeMap<PersonId, Decimal> = BTreeMap::new();
        let mut owed: BTreeMap<PersonId, Decimal> = BTreeMap::new();
        let mut names: HashMap<PersonId, String> = HashMap::new();

        for person in people {
            paid.insert(person.id, Decimal::ZERO);
            owed.insert(person.id, Decimal::ZERO);
            names.insert(person.id, person.name.clone());
        }

        for event in events {
            if let (Some(payer), Some(amount)) = (event.payer_id, event.amount) {
                *paid.entry(payer).or_insert(Decimal::ZERO) += amount;
                owed.entry(payer).or_insert(Decimal::ZERO);
            }
        }

        for event in events {
            let amount = event.amount_or_zero();
            let Some(parts) = participants_by_event.get(&event.id) else {
                continue;
            };
            if parts.is_empty() {
                continue;
            }

            let mut total_shares: Decimal = parts.iter().map(|p| p.share_or_default()).sum();
            let equal_fallback = total_shares == Decimal::ZERO;
            if equal_fallback {
                // All shares explicitly zero: fall back to an equal split,
                // weighting every participant at 1 over the head count.
                total_shares = Decimal::from(parts.len());
            }

            for part in parts {
                let share = if equal_fallback {
                    Decimal::ONE
                } else {
                    part.share_or_default()
                };
                let slice = if amount == Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    share_amount(amount, share, total_shares)
                };
                *owed.entry(part.person_id).or_insert(Decimal::ZERO) += slice;
                paid.entry(part.person_id).or_insert(Decimal::ZERO);
            }
        }

        let summaries = paid
            .keys()
            .map(|&id| {
                let p = round2(paid.get(&id).copied().unwrap_or(Decimal::ZERO));
                let o = round2(owed.get(&id).copied().unwrap_or(Decimal::ZERO));
                PersonSummary {
                    person_id: id,
                    name: names
                        .get(&id)
                        .cloned()
                        .unwrap_or_else(|| id.to_string()),
                    paid: p,
                    owed: o,
                    balance: round2(p - o),
                }
            })
            .collect();

        Self { summaries }
    }

    /// Summaries in ascending person-id order.
    pub fn summaries(&self) -> &[PersonSummary] {
        &self.summaries
    }

    pub fn into_summaries(self) -> Vec<PersonSummary> {
        self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// The balance of one person, zero if unknown.
    pub fn balance_of(&self, person_id: PersonId) -> Decimal {
        self.summaries
            .iter()
            .find(|s| s.person_id == person_id)
            .map(|s| s.balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all balances. Zero within rounding tolerance for any
    /// consistent snapshot.
    pub fn net_sum(&self) -> Decimal {
        self.summaries.iter().map(|s| s.balance).sum()
    }
}
