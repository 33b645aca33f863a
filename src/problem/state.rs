//! Mutable problem state: the city set, its partition into tours, and
//! the annealing schedule parameters.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::MapParams;
use super::types::{City, Tour};
use crate::bound;

/// Cooling rate applied to every freshly generated map.
pub const INITIAL_COOLING_RATE: f64 = 0.999;

/// The complete state of one multiple-traveling-salesman instance.
///
/// Owns the master city list, the partition of those cities into tours,
/// the map dimensions, the annealing schedule (temperature and cooling
/// rate), the step counter, and the cached lower bound on total tour
/// length.
///
/// The lower bound is a property of the city set alone, so it is
/// computed once per [`generate`](ProblemState::generate) and survives
/// [`randomize`](ProblemState::randomize) unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemState {
    /// All cities, in generation order (reshuffled by `randomize`).
    /// Tour membership never changes this list.
    cities: Vec<City>,
    tours: Vec<Tour>,
    width: i32,
    height: i32,
    temperature: f64,
    cooling_rate: f64,
    steps: u64,
    lower_bound: f64,
}

impl ProblemState {
    /// Generates a fresh instance from the given parameters.
    ///
    /// Cities are drawn uniformly on the `[0, width) x [0, height)`
    /// integer grid, redrawing on collision until all positions are
    /// distinct, then dealt round-robin onto the tours (city `i` goes
    /// to tour `i % num_tours`). The starting temperature is
    /// `10 * num_cities` and the cooling rate [`INITIAL_COOLING_RATE`].
    pub fn generate<R: Rng>(params: &MapParams, rng: &mut R) -> Result<Self, String> {
        params.validate()?;

        let mut cities = Vec::with_capacity(params.num_cities);
        let mut occupied = HashSet::with_capacity(params.num_cities);
        while cities.len() < params.num_cities {
            let candidate = City::new(
                rng.random_range(0..params.width),
                rng.random_range(0..params.height),
            );
            if occupied.insert(candidate) {
                cities.push(candidate);
            }
        }

        let lower_bound = bound::lower_bound(&cities, params.num_tours);

        let mut state = Self {
            cities,
            tours: vec![Tour::new(); params.num_tours],
            width: params.width,
            height: params.height,
            temperature: 10.0 * params.num_cities as f64,
            cooling_rate: INITIAL_COOLING_RATE,
            steps: 0,
            lower_bound,
        };
        state.distribute_cities();
        Ok(state)
    }

    /// Builds an instance from an explicit tour assignment.
    ///
    /// The master city list is the concatenation of the tours in index
    /// order. Cities must be distinct and inside
    /// `[0, width) x [0, height)`; at least one tour is required. The
    /// schedule starts as a fresh generation would: temperature
    /// `10 * num_cities`, cooling rate [`INITIAL_COOLING_RATE`], step
    /// counter 0, lower bound computed from the combined city set.
    pub fn from_tours(tours: Vec<Tour>, width: i32, height: i32) -> Result<Self, String> {
        if tours.is_empty() {
            return Err("at least one tour is required".into());
        }
        if width < 1 || height < 1 {
            return Err(format!("map dimensions must be positive, got {width}x{height}"));
        }

        let mut cities = Vec::new();
        let mut occupied = HashSet::new();
        for tour in &tours {
            for city in tour {
                if city.x < 0 || city.x >= width || city.y < 0 || city.y >= height {
                    return Err(format!("city {city} outside the {width}x{height} map"));
                }
                if !occupied.insert(*city) {
                    return Err(format!("duplicate city {city}"));
                }
                cities.push(*city);
            }
        }

        let num_tours = tours.len();
        let lower_bound = bound::lower_bound(&cities, num_tours);
        Ok(Self {
            temperature: 10.0 * cities.len() as f64,
            cities,
            tours,
            width,
            height,
            cooling_rate: INITIAL_COOLING_RATE,
            steps: 0,
            lower_bound,
        })
    }

    /// Shuffles the master city list and deals it back onto the tours
    /// round-robin, discarding the current tour assignment.
    ///
    /// The lower bound is left untouched: it depends only on the city
    /// set, not on how the cities are split into tours.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cities.shuffle(rng);
        for tour in &mut self.tours {
            tour.clear();
        }
        self.distribute_cities();
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn set_cooling_rate(&mut self, cooling_rate: f64) {
        self.cooling_rate = cooling_rate;
    }

    pub fn num_tours(&self) -> usize {
        self.tours.len()
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn num_steps(&self) -> u64 {
        self.steps
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// MST-derived lower bound on the total tour length, fixed at
    /// generation time.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// The tour at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_tours()`.
    pub fn tour(&self, index: usize) -> &Tour {
        &self.tours[index]
    }

    /// All tours, in stable index order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// The master city list, in generation (or last shuffle) order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Moves the city at `from_index` of tour `from` to `to_index` of
    /// tour `to`. Removal happens before insertion, so a same-tour move
    /// interprets `to_index` against the shortened tour.
    pub(crate) fn relocate(&mut self, from: usize, from_index: usize, to: usize, to_index: usize) {
        let city = self.tours[from].remove(from_index);
        self.tours[to].insert(to_index, city);
    }

    /// Applies one cooling step: `temperature *= cooling_rate`.
    pub(crate) fn cool(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    pub(crate) fn advance_step(&mut self) {
        self.steps += 1;
    }

    // Deal the master list onto the tours: city i -> tour i % num_tours.
    fn distribute_cities(&mut self) {
        let num_tours = self.tours.len();
        for (i, city) in self.cities.iter().enumerate() {
            self.tours[i % num_tours].push(*city);
        }
    }
}

impl fmt::Display for ProblemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProblemState[num_tours={}, num_cities={}, width={}, height={}, \
             steps={}, temperature={}, cooling_rate={}]",
            self.num_tours(),
            self.num_cities(),
            self.width,
            self.height,
            self.steps,
            self.temperature,
            self.cooling_rate
        )
    }
}
