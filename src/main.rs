//! settlement-engine CLI
//!
//! Settle group expenses from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compute settling transactions from a JSON group file
//! settlement-engine settle --input group.json
//!
//! # Per-person balances plus transactions, as JSON
//! settlement-engine balances --input group.json --format json
//!
//! # Generate a random group for testing
//! settlement-engine generate --people 10 --events 30
//! ```

use rust_decimal::Decimal;
use settlement_engine::core::event::{Event, EventId, Participant};
use settlement_engine::core::group::{Group, GroupId};
use settlement_engine::core::person::{Person, PersonId};
use settlement_engine::settle::engine::SettlementEngine;
use settlement_engine::simulation::random_group::{generate_random_group, GroupConfig};
use settlement_engine::store::memory::MemoryStore;
use settlement_engine::store::ExpenseStore;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"settlement-engine — settle shared group expenses

USAGE:
    settlement-engine <COMMAND> [OPTIONS]

COMMANDS:
    settle      Compute the transactions that settle a group
    balances    Show per-person paid/owed/balance plus transactions
    generate    Generate a random group file (for testing)
    help        Show this message

OPTIONS (settle, balances):
    --input <FILE>      Path to JSON group file
    --group <ID>        Group id to settle (default: the file's group)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --people <N>        Number of people (default: 10)
    --events <N>        Number of events (default: 30)
    --weighted          Use random share weights instead of equal splits
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    settlement-engine settle --input group.json
    settlement-engine balances --input group.json --format json
    settlement-engine generate --people 5 --events 12 --output test.json"#
    );
}

/// JSON schema for input group files.
#[derive(serde::Deserialize)]
struct GroupFile {
    group: GroupInput,
    #[serde(default)]
    people: Vec<PersonInput>,
    #[serde(default)]
    events: Vec<EventInput>,
}

#[derive(serde::Deserialize)]
struct GroupInput {
    id: i64,
    name: String,
}

#[derive(serde::Deserialize)]
struct PersonInput {
    id: i64,
    name: String,
}

#[derive(serde::Deserialize)]
struct EventInput {
    id: i64,
    title: String,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    payer: Option<i64>,
    #[serde(default)]
    participants: Vec<ParticipantInput>,
}

#[derive(serde::Deserialize)]
struct ParticipantInput {
    person: i64,
    #[serde(default)]
    share: Option<String>,
}

#[derive(serde::Serialize)]
struct OutputGroupFile {
    group: OutputGroup,
    people: Vec<OutputPerson>,
    events: Vec<OutputEvent>,
}

#[derive(serde::Serialize)]
struct OutputGroup {
    id: i64,
    name: String,
}

#[derive(serde::Serialize)]
struct OutputPerson {
    id: i64,
    name: String,
}

#[derive(serde::Serialize)]
struct OutputEvent {
    id: i64,
    title: String,
    amount: Option<String>,
    payer: Option<i64>,
    participants: Vec<OutputParticipant>,
}

#[derive(serde::Serialize)]
struct OutputParticipant {
    person: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    share: Option<String>,
}

fn parse_amount(raw: &str, context: &str) -> Decimal {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Invalid amount '{}' for {}: {}", raw, context, e);
        process::exit(1);
    })
}

fn load_group(path: &str) -> (MemoryStore, GroupId) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: GroupFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "group": {{ "id": 1, "name": "Trip" }},
  "people": [ {{ "id": 1, "name": "Alice" }} ],
  "events": [
    {{ "id": 10, "title": "Dinner", "amount": "30.00", "payer": 1,
       "participants": [ {{ "person": 1 }}, {{ "person": 2, "share": "2" }} ] }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut store = MemoryStore::new();
    let gid = GroupId::new(file.group.id);
    store.add_group(Group::new(gid, file.group.name));

    for p in file.people {
        store.add_person(Person::new(p.id, p.name, gid));
    }

    for e in file.events {
        let amount = e
            .amount
            .as_deref()
            .map(|raw| parse_amount(raw, &format!("event '{}'", e.title)));
        store.add_event(Event::new(
            e.id,
            gid,
            e.title.clone(),
            e.payer.map(PersonId::new),
            amount,
        ));
        for part in e.participants {
            let share = part
                .share
                .as_deref()
                .map(|raw| parse_amount(raw, &format!("participant {} of event '{}'", part.person, e.title)));
            store.add_participant(Participant::new(EventId::new(e.id), part.person, share));
        }
    }

    (store, gid)
}

struct ReportOptions {
    input_path: String,
    group_id: Option<i64>,
    format: String,
}

fn parse_report_options(args: &[String]) -> ReportOptions {
    let mut input_path = None;
    let mut group_id = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--group" => {
                i += 1;
                group_id = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--group requires a numeric id");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    ReportOptions {
        input_path,
        group_id,
        format,
    }
}

fn cmd_settle(args: &[String]) {
    let opts = parse_report_options(args);
    let (store, file_gid) = load_group(&opts.input_path);
    let gid = opts.group_id.map(GroupId::new).unwrap_or(file_gid);

    let engine = SettlementEngine::new(store);
    let transactions = engine.settle(gid).unwrap_or_else(|e| {
        eprintln!("Settlement failed: {}", e);
        process::exit(1);
    });

    if opts.format == "json" {
        println!("{}", serde_json::to_string_pretty(&transactions).unwrap());
    } else if transactions.is_empty() {
        println!("Nothing to settle.");
    } else {
        println!("=== Settlement ===");
        for t in &transactions {
            println!("  {}", t);
        }
        println!("\nTotal transactions: {}", transactions.len());
    }
}

fn cmd_balances(args: &[String]) {
    let opts = parse_report_options(args);
    let (store, file_gid) = load_group(&opts.input_path);
    let gid = opts.group_id.map(GroupId::new).unwrap_or(file_gid);

    let engine = SettlementEngine::new(store);
    let report = engine.settle_detailed(gid).unwrap_or_else(|e| {
        eprintln!("Settlement failed: {}", e);
        process::exit(1);
    });

    if opts.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("=== Balances ===");
        for s in &report.people {
            println!(
                "  {:<20} paid {:>10}  owed {:>10}  balance {:>10}",
                s.name, s.paid, s.owed, s.balance
            );
        }
        println!("\n=== Settlement ===");
        if report.transactions.is_empty() {
            println!("  Nothing to settle.");
        } else {
            for t in &report.transactions {
                println!("  {}", t);
            }
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut people = 10usize;
    let mut events = 30usize;
    let mut weighted = false;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--people" => {
                i += 1;
                people = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--people requires a number");
                    process::exit(1);
                });
            }
            "--events" => {
                i += 1;
                events = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--events requires a number");
                    process::exit(1);
                });
            }
            "--weighted" => {
                weighted = true;
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = GroupConfig {
        person_count: people.max(2),
        event_count: events,
        weighted_shares: weighted,
        ..Default::default()
    };

    let (store, gid) = generate_random_group(&config);

    let group = store.group(gid).unwrap().unwrap();
    let out_people: Vec<OutputPerson> = store
        .people_in_group(gid)
        .unwrap()
        .into_iter()
        .map(|p| OutputPerson {
            id: p.id.as_i64(),
            name: p.name,
        })
        .collect();

    let out_events: Vec<OutputEvent> = store
        .events_in_group(gid)
        .unwrap()
        .into_iter()
        .map(|e| {
            let participants = store
                .participants_for_event(e.id)
                .unwrap()
                .into_iter()
                .map(|p| OutputParticipant {
                    person: p.person_id.as_i64(),
                    share: p.share.map(|s| s.to_string()),
                })
                .collect();
            OutputEvent {
                id: e.id.as_i64(),
                title: e.title,
                amount: e.amount.map(|a| a.to_string()),
                payer: e.payer_id.map(|p| p.as_i64()),
                participants,
            }
        })
        .collect();

    let out = OutputGroupFile {
        group: OutputGroup {
            id: gid.as_i64(),
            name: group.name,
        },
        people: out_people,
        events: out_events,
    };

    let json = serde_json::to_string_pretty(&out).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} events across {} people → {}",
            events, people, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "balances" => cmd_balances(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
