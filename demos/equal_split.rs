//! The simplest settlement: one dinner, three people, equal split.

use rust_decimal_macros::dec;
use settlement_engine::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  settlement-engine: Equal Split Example      ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let mut store = MemoryStore::new();
    let gid = GroupId::new(1);
    store.add_group(Group::new(gid, "Friday Dinner"));

    store.add_person(Person::new(1, "Alice", gid));
    store.add_person(Person::new(2, "Bob", gid));
    store.add_person(Person::new(3, "Carol", gid));

    // Alice pays 30.00 for everyone
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

    let engine = SettlementEngine::new(store);
    let report = engine.settle_detailed(gid).unwrap();

    println!("━━━ Balances ━━━\n");
    for s in &report.people {
        println!(
            "{:<8} paid {:>7}  owed {:>7}  balance {:>8}",
            s.name, s.paid, s.owed, s.balance
        );
    }

    println!("\n━━━ Settlement ━━━\n");
    for t in &report.transactions {
        println!("{}", t);
    }
}
