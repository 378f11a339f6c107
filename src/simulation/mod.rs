//! Random data generation for stress testing the settlement pipeline.

pub mod random_group;
