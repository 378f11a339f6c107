//! # settlement-engine
//!
//! Group expense settlement engine.
//!
//! Given a group of people, the events they paid for, and each
//! participant's share weight, this engine computes per-person balances
//! and a minimal sequence of peer-to-peer transactions that zeroes
//! every balance.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: people, groups, events, money rounding
//! - **store** — Read seam: the `ExpenseStore` trait and an in-memory impl
//! - **settle** — Balance aggregation and greedy debt simplification
//! - **simulation** — Random group generation for stress testing

pub mod core;
pub mod settle;
pub mod simulation;
pub mod store;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::event::{Event, EventId, Participant};
    pub use crate::core::group::{Group, GroupId};
    pub use crate::core::person::{Person, PersonId};
    pub use crate::settle::balance::{BalanceSheet, PersonSummary};
    pub use crate::settle::engine::{SettleError, SettlementEngine, SettlementReport};
    pub use crate::settle::simplify::Transaction;
    pub use crate::store::memory::MemoryStore;
    pub use crate::store::{ExpenseStore, StoreError};
}
