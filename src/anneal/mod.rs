//! Simulated annealing over tour assignments.
//!
//! The move operator relocates a single city between (or within)
//! tours; acceptance is the original one-sided threshold test
//! `delta < temperature` with geometric cooling applied on every
//! accepted move. Batches run synchronously to completion — the driver
//! decides how many steps each tick gets.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod runner;

pub use runner::{AnnealRunner, BatchOutcome};
