//! Batch execution of annealing moves.

use rand::Rng;

use crate::objective::ObjectiveSet;
use crate::problem::ProblemState;

/// Report of one completed optimization batch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchOutcome {
    /// Number of annealing steps performed (always the requested count).
    pub steps: usize,

    /// Number of accepted moves.
    pub accepted: usize,

    /// Number of accepted moves that improved the selected objective.
    pub improving: usize,

    /// Selected objective's value after the batch.
    pub final_value: f64,

    /// Temperature after the batch.
    pub final_temperature: f64,
}

/// Executes annealing batches against a [`ProblemState`].
///
/// One step relocates a single randomly chosen city to a random
/// position in a random tour and keeps the move iff
/// `new_value - previous_value < temperature` — a one-sided threshold
/// test, deliberately not a Metropolis probability. Acceptance commits
/// the new value and cools the temperature by the state's cooling
/// rate; rejection undoes the relocation exactly. The step counter
/// advances either way.
///
/// Only the selected objective is evaluated during the batch. Stored
/// readings are untouched; the driver refreshes them (and notifies
/// observers) once the batch returns.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs `steps` annealing steps driven by the objective at
    /// `objective_index`.
    ///
    /// Fails without touching the state when the objective index is
    /// out of range, `steps` is 0, or the map has fewer than two
    /// cities — relocation needs a city to move and somewhere for it
    /// to go, and the selection loops could otherwise never terminate.
    pub fn run<R: Rng>(
        state: &mut ProblemState,
        objectives: &ObjectiveSet,
        objective_index: usize,
        steps: usize,
        rng: &mut R,
    ) -> Result<BatchOutcome, String> {
        if objective_index >= objectives.len() {
            return Err(format!(
                "objective index {objective_index} out of range (have {})",
                objectives.len()
            ));
        }
        if steps == 0 {
            return Err("steps must be at least 1".into());
        }
        if state.num_cities() < 2 {
            // With fewer than two cities some source-tour draws have no
            // valid counterpart and the selection loop would never
            // terminate.
            return Err(format!(
                "cannot optimize a map with {} cities",
                state.num_cities()
            ));
        }

        let num_tours = state.num_tours();
        let mut current_value = objectives.evaluate(objective_index, state);
        let mut accepted = 0usize;
        let mut improving = 0usize;

        for _ in 0..steps {
            let tour_a = rng.random_range(0..num_tours);

            // The source tour needs a city to take; a same-tour move
            // needs two distinct positions.
            let tour_b = loop {
                let candidate = rng.random_range(0..num_tours);
                let required = if candidate == tour_a { 2 } else { 1 };
                if state.tour(candidate).len() >= required {
                    break candidate;
                }
            };

            let city_a = rng.random_range(0..state.tour(tour_a).len().max(1));
            let city_b = loop {
                let candidate = rng.random_range(0..state.tour(tour_b).len());
                if tour_a != tour_b || candidate != city_a {
                    break candidate;
                }
            };

            state.relocate(tour_b, city_b, tour_a, city_a);

            let new_value = objectives.evaluate(objective_index, state);
            if new_value - current_value < state.temperature() {
                accepted += 1;
                if new_value < current_value {
                    improving += 1;
                }
                current_value = new_value;
                state.cool();
            } else {
                state.relocate(tour_a, city_a, tour_b, city_b);
            }

            state.advance_step();
        }

        Ok(BatchOutcome {
            steps,
            accepted,
            improving,
            final_value: current_value,
            final_temperature: state.temperature(),
        })
    }
}
