//! Objectives: scalar functions of the tour configuration.
//!
//! Each objective implements the two-function contract of
//! [`Objective`] — a value for the current configuration and a derived
//! reference optimum. The selected objective drives the annealing
//! search; all registered objectives are recomputed after each state
//! mutation for display.

mod builtin;
mod set;
mod types;

pub use builtin::{LongestTour, TotalLength, TotalLengthWithSpread};
pub use set::ObjectiveSet;
pub use types::{Objective, Reading};
