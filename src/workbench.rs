//! The interactive command surface.
//!
//! A [`Workbench`] owns one problem instance, the objective registry,
//! the observer list, and the random number generator. Every command
//! follows the same cycle: mutate the state, refresh all objective
//! readings, notify observers once. Drivers (a UI timer, a test
//! harness, a REPL) call commands and read the query surface; they
//! must serialize batches themselves — the engine is synchronous and
//! not reentrant.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::anneal::{AnnealRunner, BatchOutcome};
use crate::notify::{ChangeNotifier, ObserverId};
use crate::objective::{ObjectiveSet, Reading};
use crate::problem::{MapParams, ProblemState};

/// Steps per batch used by the original interactive driver; a sensible
/// default for timer-driven optimization.
pub const DEFAULT_BATCH_STEPS: usize = 1000;

/// Problem state, objectives, observers and RNG under one roof.
///
/// # Examples
///
/// ```
/// use mtsp_anneal::problem::MapParams;
/// use mtsp_anneal::workbench::Workbench;
///
/// let params = MapParams::default().with_num_tours(2).with_num_cities(30);
/// let mut bench = Workbench::seeded(params, 42)?;
///
/// let outcome = bench.run_batch(0, 500)?;
/// assert_eq!(bench.state().num_steps(), 500);
/// assert!(outcome.accepted <= 500);
/// # Ok::<(), String>(())
/// ```
pub struct Workbench {
    state: ProblemState,
    objectives: ObjectiveSet,
    notifier: ChangeNotifier,
    rng: StdRng,
}

impl Workbench {
    /// Creates a workbench with the built-in objectives and an
    /// OS-entropy RNG.
    pub fn new(params: MapParams) -> Result<Self, String> {
        Self::build(params, ObjectiveSet::builtin(), StdRng::from_os_rng())
    }

    /// Creates a reproducible workbench: same seed, same maps, same
    /// optimization trajectory.
    pub fn seeded(params: MapParams, seed: u64) -> Result<Self, String> {
        Self::build(params, ObjectiveSet::builtin(), StdRng::seed_from_u64(seed))
    }

    /// Creates a workbench with a caller-assembled objective set.
    pub fn with_objectives(params: MapParams, objectives: ObjectiveSet) -> Result<Self, String> {
        Self::build(params, objectives, StdRng::from_os_rng())
    }

    fn build(params: MapParams, objectives: ObjectiveSet, mut rng: StdRng) -> Result<Self, String> {
        let state = ProblemState::generate(&params, &mut rng)?;
        let mut bench = Self {
            state,
            objectives,
            notifier: ChangeNotifier::new(),
            rng,
        };
        bench.objectives.refresh(&bench.state);
        Ok(bench)
    }

    /// Replaces the problem wholesale with a freshly generated map.
    ///
    /// On failure the current state is left untouched and nobody is
    /// notified.
    pub fn create(&mut self, params: MapParams) -> Result<(), String> {
        self.state = ProblemState::generate(&params, &mut self.rng)?;
        self.after_change();
        Ok(())
    }

    /// Reshuffles the current cities onto the tours, discarding the
    /// present assignment. The lower bound is unaffected.
    pub fn randomize(&mut self) {
        self.state.randomize(&mut self.rng);
        self.after_change();
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.state.set_temperature(temperature);
        self.after_change();
    }

    pub fn set_cooling_rate(&mut self, cooling_rate: f64) {
        self.state.set_cooling_rate(cooling_rate);
        self.after_change();
    }

    /// Runs one synchronous optimization batch driven by the objective
    /// at `objective_index`, then refreshes readings and notifies
    /// observers exactly once.
    pub fn run_batch(
        &mut self,
        objective_index: usize,
        steps: usize,
    ) -> Result<BatchOutcome, String> {
        let outcome = AnnealRunner::run(
            &mut self.state,
            &self.objectives,
            objective_index,
            steps,
            &mut self.rng,
        )?;
        self.after_change();
        Ok(outcome)
    }

    /// Registers an observer; it fires after every completed command.
    pub fn subscribe<F: FnMut() + 'static>(&mut self, observer: F) -> ObserverId {
        self.notifier.subscribe(observer)
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// The current problem state (tours, schedule, counters).
    pub fn state(&self) -> &ProblemState {
        &self.state
    }

    /// The objective registry with its latest readings.
    pub fn objectives(&self) -> &ObjectiveSet {
        &self.objectives
    }

    /// Latest reading of the objective at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= objectives().len()`.
    pub fn reading(&self, index: usize) -> Reading {
        self.objectives.reading(index)
    }

    fn after_change(&mut self) {
        self.objectives.refresh(&self.state);
        self.notifier.notify();
    }
}

impl fmt::Display for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)?;
        for (i, reading) in self.objectives.readings().iter().enumerate() {
            write!(
                f,
                ", {}[value={}, optimum={}]",
                self.objectives.name(i),
                reading.value,
                reading.optimum
            )?;
        }
        Ok(())
    }
}

impl fmt::Debug for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("state", &self.state)
            .field("objectives", &self.objectives)
            .field("notifier", &self.notifier)
            .finish()
    }
}
