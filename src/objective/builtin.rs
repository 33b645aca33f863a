//! The three built-in objectives.

use super::types::Objective;
use crate::problem::{ProblemState, Tour};

/// Sum of all tour lengths. Optimum: the lower bound itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalLength;

impl Objective for TotalLength {
    fn name(&self) -> &str {
        "Total length"
    }

    fn value(&self, state: &ProblemState) -> f64 {
        state.tours().iter().map(Tour::length).sum()
    }

    fn optimum(&self, _state: &ProblemState, lower_bound: f64) -> f64 {
        lower_bound
    }
}

/// Sum of all tour lengths plus a balance penalty: the absolute
/// deviation of each tour's length from the mean, both terms weighted
/// equally.
///
/// The penalty pushes the search toward tours of similar length. It
/// contributes nothing to the optimum — a perfectly balanced
/// configuration pays no penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalLengthWithSpread;

const LENGTH_FACTOR: f64 = 1.0;
const SPREAD_FACTOR: f64 = 1.0;

impl Objective for TotalLengthWithSpread {
    fn name(&self) -> &str {
        "Total length + distribution"
    }

    fn value(&self, state: &ProblemState) -> f64 {
        let lengths: Vec<f64> = state.tours().iter().map(Tour::length).collect();
        let total: f64 = lengths.iter().sum();
        let average = total / lengths.len() as f64;
        let spread: f64 = lengths.iter().map(|len| (len - average).abs()).sum();
        LENGTH_FACTOR * total + SPREAD_FACTOR * spread
    }

    fn optimum(&self, _state: &ProblemState, lower_bound: f64) -> f64 {
        LENGTH_FACTOR * lower_bound
    }
}

/// Length of the single longest tour. Optimum: an equal share of the
/// lower bound per tour.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestTour;

impl Objective for LongestTour {
    fn name(&self) -> &str {
        "Longest tour"
    }

    fn value(&self, state: &ProblemState) -> f64 {
        state
            .tours()
            .iter()
            .map(Tour::length)
            .fold(0.0, f64::max)
    }

    fn optimum(&self, state: &ProblemState, lower_bound: f64) -> f64 {
        lower_bound / state.num_tours() as f64
    }
}
