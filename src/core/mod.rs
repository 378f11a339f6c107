//! Foundational types shared by the settlement pipeline.

pub mod event;
pub mod group;
pub mod money;
pub mod person;
