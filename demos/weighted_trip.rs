//! A weekend trip with weighted shares and multiple payers.
//!
//! Shows how share weights prorate an event, and how the greedy
//! simplifier collapses everything into a short payment plan.

use rust_decimal_macros::dec;
use settlement_engine::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  settlement-engine: Weighted Trip Example    ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let mut store = MemoryStore::new();
    let gid = GroupId::new(1);
    store.add_group(Group::new(gid, "Coast Trip"));

    store.add_person(Person::new(1, "Alice", gid));
    store.add_person(Person::new(2, "Bob", gid));
    store.add_person(Person::new(3, "Carol", gid));
    store.add_person(Person::new(4, "Dave", gid));

    // Alice books the house: equal split
    store.add_event(Event::new(
        10,
        gid,
        "Beach house",
        Some(PersonId::new(1)),
        Some(dec!(400.00)),
    ));
    for pid in 1..=4 {
        store.add_participant(Participant::new(EventId::new(10), pid, None));
    }

    // Carol buys groceries: Dave eats for two
    store.add_event(Event::new(
        11,
        gid,
        "Groceries",
        Some(PersonId::new(3)),
        Some(dec!(150.00)),
    ));
    store.add_participant(Participant::new(EventId::new(11), 1, Some(dec!(1))));
    store.add_participant(Participant::new(EventId::new(11), 2, Some(dec!(1))));
    store.add_participant(Participant::new(EventId::new(11), 3, Some(dec!(1))));
    store.add_participant(Participant::new(EventId::new(11), 4, Some(dec!(2))));

    // Bob covers fuel, only the two drivers split it
    store.add_event(Event::new(
        12,
        gid,
        "Fuel",
        Some(PersonId::new(2)),
        Some(dec!(90.00)),
    ));
    store.add_participant(Participant::new(EventId::new(12), 1, None));
    store.add_participant(Participant::new(EventId::new(12), 2, None));

    let engine = SettlementEngine::new(store);
    let report = engine.settle_detailed(gid).unwrap();

    println!("━━━ Balances ━━━\n");
    for s in &report.people {
        println!(
            "{:<8} paid {:>8}  owed {:>8}  balance {:>9}",
            s.name, s.paid, s.owed, s.balance
        );
    }

    println!("\n━━━ Settlement ({} transactions) ━━━\n", report.transactions.len());
    for t in &report.transactions {
        println!("{}", t);
    }
}
