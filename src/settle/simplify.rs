use crate::core::money::round2;
use crate::core::person::PersonId;
use crate::settle::balance::BalanceSheet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// One peer-to-peer payment in a settlement plan.
///
/// `amount` is strictly positive with a fixed scale of 2, and
/// `from_id` is never equal to `to_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub from_id: PersonId,
    pub from_name: String,
    pub to_id: PersonId,
    pub to_name: String,
    pub amount: Decimal,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pays {} {}",
            self.from_name, self.to_name, self.amount
        )
    }
}

/// Heap entry: largest remaining amount wins; equal amounts pop in
/// insertion order so the output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueueEntry {
    amount: Decimal,
    seq: usize,
    person_id: PersonId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy debt simplification.
///
/// Partitions people into creditors (balance > 0) and debtors
/// (balance < 0, tracked by absolute value), each in a max-heap keyed
/// by remaining amount. Repeatedly matches the largest creditor with
/// the largest debtor, transferring `min` of the two remainders, until
/// one side empties. O(n log n) over people with non-zero balance.
///
/// People already at zero produce no transactions; a one-cent rounding
/// residue on one side simply leaves that side's queue non-empty and
/// emits no corrective transfer.
pub fn simplify(sheet: &BalanceSheet) -> Vec<Transaction> {
    let mut creditors: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut debtors: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut names: HashMap<PersonId, &str> = HashMap::new();
    let mut seq = 0usize;

    for summary in sheet.summaries() {
        names.insert(summary.person_id, summary.name.as_str());
        if summary.balance > Decimal::ZERO {
            creditors.push(QueueEntry {
                amount: summary.balance,
                seq,
                person_id: summary.person_id,
            });
        } else if summary.balance < Decimal::ZERO {
            debtors.push(QueueEntry {
                amount: summary.balance.abs(),
                seq,
                person_id: summary.person_id,
            });
        }
        seq += 1;
    }

    let mut transactions = Vec::new();

    while let (Some(creditor), Some(debtor)) = (creditors.pop(), debtors.pop()) {
        let transfer = round2(creditor.amount.min(debtor.amount));

        transactions.push(Transaction {
            from_id: debtor.person_id,
            from_name: name_of(&names, debtor.person_id),
            to_id: creditor.person_id,
            to_name: name_of(&names, creditor.person_id),
            amount: transfer,
        });

        let creditor_left = round2(creditor.amount - transfer);
        let debtor_left = round2(debtor.amount - transfer);

        // Remainders keep their original sequence number, so a partially
        // settled person does not lose their place among equal amounts.
        if creditor_left > Decimal::ZERO {
            creditors.push(QueueEntry {
                amount: creditor_left,
                seq: creditor.seq,
                person_id: creditor.person_id,
            });
        }
        if debtor_left > Decimal::ZERO {
            debtors.push(QueueEntry {
                amount: debtor_left,
                seq: debtor.seq,
                person_id: debtor.person_id,
            });
        }
    }

    transactions
}

fn name_of(names: &HashMap<PersonId, &str>, id: PersonId) -> String {
    names.get(&id).map(|n| n.to_string()).unwrap_or_else(|| id.to_string())
}
