//! Ordered objective registry with cached readings.

use super::builtin::{LongestTour, TotalLength, TotalLengthWithSpread};
use super::types::{Objective, Reading};
use crate::problem::ProblemState;

/// An ordered collection of objectives plus one [`Reading`] per
/// objective.
///
/// The set is fixed at construction time: start from [`builtin`]
/// (or [`new`] for an empty set) and append further objectives with
/// [`with_objective`]. Readings start at zero and are filled in by
/// [`refresh`], which the driver calls after every state mutation.
///
/// [`builtin`]: ObjectiveSet::builtin
/// [`new`]: ObjectiveSet::new
/// [`with_objective`]: ObjectiveSet::with_objective
/// [`refresh`]: ObjectiveSet::refresh
pub struct ObjectiveSet {
    objectives: Vec<Box<dyn Objective>>,
    readings: Vec<Reading>,
}

impl ObjectiveSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            objectives: Vec::new(),
            readings: Vec::new(),
        }
    }

    /// Creates the standard set: total length, total length +
    /// distribution, longest tour — in that order.
    pub fn builtin() -> Self {
        Self::new()
            .with_objective(TotalLength)
            .with_objective(TotalLengthWithSpread)
            .with_objective(LongestTour)
    }

    /// Appends an objective to the set.
    pub fn with_objective<O: Objective + 'static>(mut self, objective: O) -> Self {
        self.objectives.push(Box::new(objective));
        self.readings.push(Reading::default());
        self
    }

    /// Number of registered objectives.
    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    /// Name of the objective at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn name(&self, index: usize) -> &str {
        self.objectives[index].name()
    }

    /// Names of all objectives in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.objectives.iter().map(|o| o.name()).collect()
    }

    /// The reading captured at the last [`refresh`](ObjectiveSet::refresh).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn reading(&self, index: usize) -> Reading {
        self.readings[index]
    }

    /// All readings in registration order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Evaluates a single objective's value against `state` without
    /// touching the stored readings.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn evaluate(&self, index: usize, state: &ProblemState) -> f64 {
        self.objectives[index].value(state)
    }

    /// Recomputes value and optimum for every objective.
    pub fn refresh(&mut self, state: &ProblemState) {
        let bound = state.lower_bound();
        for (objective, reading) in self.objectives.iter().zip(self.readings.iter_mut()) {
            reading.value = objective.value(state);
            reading.optimum = objective.optimum(state, bound);
        }
    }
}

impl Default for ObjectiveSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ObjectiveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectiveSet")
            .field("names", &self.names())
            .field("readings", &self.readings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{City, Tour};

    fn square_state() -> ProblemState {
        let tours = vec![
            Tour::from_cities(vec![City::new(0, 0), City::new(3, 0)]),
            Tour::from_cities(vec![City::new(0, 4), City::new(3, 4)]),
        ];
        ProblemState::from_tours(tours, 10, 10).expect("valid layout")
    }

    #[test]
    fn test_builtin_set() {
        let set = ObjectiveSet::builtin();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.names(),
            vec!["Total length", "Total length + distribution", "Longest tour"]
        );
    }

    #[test]
    fn test_readings_start_at_zero() {
        let set = ObjectiveSet::builtin();
        for reading in set.readings() {
            assert_eq!(reading.value, 0.0);
            assert_eq!(reading.optimum, 0.0);
            assert_eq!(reading.difference(), 0.0);
        }
    }

    #[test]
    fn test_refresh_fills_readings() {
        let state = square_state();
        let mut set = ObjectiveSet::builtin();
        set.refresh(&state);

        // This layout sits exactly on the optimum for all three
        // built-in objectives.
        for (i, reading) in set.readings().iter().enumerate() {
            assert!(
                reading.difference().abs() < 1e-12,
                "objective {} off optimum: {:?}",
                set.name(i),
                reading
            );
        }
        assert!((set.reading(0).value - 12.0).abs() < 1e-12);
        assert!((set.reading(2).value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_does_not_touch_readings() {
        let state = square_state();
        let set = ObjectiveSet::builtin();
        let value = set.evaluate(0, &state);
        assert!((value - 12.0).abs() < 1e-12);
        assert_eq!(set.reading(0), Reading::default());
    }

    #[test]
    fn test_custom_objective_extension() {
        struct TourCount;
        impl Objective for TourCount {
            fn name(&self) -> &str {
                "Tour count"
            }
            fn value(&self, state: &ProblemState) -> f64 {
                state.num_tours() as f64
            }
            fn optimum(&self, state: &ProblemState, _lower_bound: f64) -> f64 {
                state.num_tours() as f64
            }
        }

        let state = square_state();
        let mut set = ObjectiveSet::builtin().with_objective(TourCount);
        assert_eq!(set.len(), 4);
        set.refresh(&state);
        assert_eq!(set.reading(3).difference(), 0.0);
        assert!((set.reading(3).value - 2.0).abs() < 1e-12);
    }
}
