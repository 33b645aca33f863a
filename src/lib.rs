//! Multiple-traveling-salesman simulated annealing demonstrator.
//!
//! Several travelers share one set of cities; each runs a closed tour,
//! and every city belongs to exactly one tour. The crate optimizes the
//! assignment with simulated annealing and exposes the pieces an
//! interactive driver needs for live tuning:
//!
//! - **Problem state**: distinct integer-coordinate cities partitioned
//!   round-robin into tours, plus the annealing schedule (temperature,
//!   cooling rate) and step counter.
//! - **Lower bound**: a minimum-spanning-tree estimate of the best
//!   achievable total length, computed once per map and used to
//!   normalize objective readings.
//! - **Objectives**: total length, total length with a balance
//!   penalty, and longest single tour — an ordered, extensible
//!   registry sharing one two-function contract.
//! - **Annealing**: single-city relocation moves accepted by the
//!   one-sided threshold `delta < temperature`, cooling geometrically
//!   on each accepted move, executed in synchronous batches.
//! - **Notification**: an ordered observer list fired once per
//!   completed command, so viewers redraw without polling.
//!
//! The [`workbench::Workbench`] ties these together behind the command
//! surface a UI or test harness drives. Everything is single-threaded
//! and in-memory; this is a pedagogical annealing demonstrator, not a
//! production TSP solver.

pub mod anneal;
pub mod bound;
pub mod notify;
pub mod objective;
pub mod problem;
pub mod workbench;
