//! Problem representation: cities, tours, and the mutable instance state.
//!
//! A map is a set of distinct integer-coordinate cities partitioned into
//! one closed tour per traveler. [`ProblemState`] owns the partition
//! together with the annealing schedule (temperature, cooling rate) and
//! the cached lower bound used to normalize objective values.

mod config;
mod state;
mod types;

pub use config::MapParams;
pub use state::{ProblemState, INITIAL_COOLING_RATE};
pub use types::{City, Tour};
