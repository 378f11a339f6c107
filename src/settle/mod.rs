//! The settlement pipeline: balances in, transactions out.

pub mod balance;
pub mod engine;
pub mod simplify;
