//! The annealing loop.

use super::config::{Acceptance, AnnealConfig};
use super::schedule::expected_iterations;
use super::types::{MetricSample, RunMetrics};
use crate::cost::CostMatrix;
use crate::error::{Error, Result};
use crate::random::rng_from;
use crate::tour::{perturb, Tour};
use rand::rngs::StdRng;
use rand::Rng;

const MAX_PREALLOCATED_SAMPLES: usize = 1 << 22;

/// Result of a single annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Lowest-cost tour the run visited.
    pub best: Tour,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of loop iterations executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Candidates that replaced the current tour (including improvements).
    pub accepted_moves: usize,

    /// Candidates with strictly lower cost than the current tour.
    pub improving_moves: usize,

    /// Per-iteration trajectory.
    pub metrics: RunMetrics,
}

/// State of one annealing run.
///
/// Holds the current tour, the run-local best, the temperature and the
/// run's own random source. Call [`AnnealRun::step`] to advance one
/// iteration, or [`AnnealRun::run_with`] to drive the run to the
/// temperature floor.
pub struct AnnealRun<'a, R: Rng = StdRng> {
    matrix: &'a CostMatrix,
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    temperature: f64,
    alpha: f64,
    min_temperature: f64,
    acceptance: Acceptance,
    iteration: usize,
    accepted_moves: usize,
    improving_moves: usize,
    metrics: RunMetrics,
    rng: R,
}

impl<'a> AnnealRun<'a, StdRng> {
    /// Creates a run seeded from `config.seed`.
    pub fn new(
        matrix: &'a CostMatrix,
        start: Tour,
        initial_temperature: f64,
        config: &AnnealConfig,
    ) -> Result<Self> {
        Self::with_rng(matrix, start, initial_temperature, config, rng_from(config.seed))
    }
}

impl<'a, R: Rng> AnnealRun<'a, R> {
    /// Creates a run driven by a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, the matrix is empty, or `start` is
    /// not a tour over the matrix's nodes.
    pub fn with_rng(
        matrix: &'a CostMatrix,
        start: Tour,
        initial_temperature: f64,
        config: &AnnealConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        if matrix.is_empty() {
            return Err(Error::EmptyInput);
        }
        if start.len() != matrix.len() || !start.is_permutation() {
            return Err(Error::invalid_input(format!(
                "starting tour has {} nodes, matrix has {}",
                start.len(),
                matrix.len()
            )));
        }
        if !initial_temperature.is_finite() {
            return Err(Error::invalid_config(format!(
                "initial temperature must be finite, got {initial_temperature}"
            )));
        }

        let cost = start.cost(matrix);
        let capacity = expected_iterations(initial_temperature, config.alpha, config.min_temperature)
            .min(MAX_PREALLOCATED_SAMPLES);
        Ok(Self {
            matrix,
            best: start.clone(),
            best_cost: cost,
            current: start,
            current_cost: cost,
            temperature: initial_temperature,
            alpha: config.alpha,
            min_temperature: config.min_temperature,
            acceptance: config.acceptance,
            iteration: 0,
            accepted_moves: 0,
            improving_moves: 0,
            metrics: RunMetrics::with_capacity(capacity),
            rng,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current(&self) -> (&Tour, f64) {
        (&self.current, self.current_cost)
    }

    pub fn best(&self) -> (&Tour, f64) {
        (&self.best, self.best_cost)
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.temperature <= self.min_temperature
    }

    /// Advances one iteration.
    ///
    /// Returns `Some(best_cost)` when the iteration produced a new
    /// run-local best, `None` otherwise (including when the run is already
    /// finished).
    pub fn step(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.iteration += 1;

        let swap = perturb(&mut self.current, &mut self.rng);
        let candidate_cost = self.current.cost(self.matrix);
        let delta = candidate_cost - self.current_cost;

        let mut improved = None;
        if self.acceptance.accepts(delta, self.temperature, &mut self.rng) {
            if delta < 0.0 {
                self.improving_moves += 1;
            }
            self.accepted_moves += 1;
            self.current_cost = candidate_cost;

            if self.current_cost < self.best_cost {
                self.best_cost = self.current_cost;
                self.best.clone_from(&self.current);
                improved = Some(self.best_cost);
            }
        } else {
            swap.revert(&mut self.current);
        }

        self.metrics.push(MetricSample {
            iteration: self.iteration,
            current_cost: self.current_cost,
            best_cost: self.best_cost,
        });
        self.temperature *= self.alpha;
        improved
    }

    /// Runs to the temperature floor, calling `on_improve` with every new
    /// run-local best.
    pub fn run_with<F>(mut self, mut on_improve: F) -> AnnealResult
    where
        F: FnMut(&Tour, f64),
    {
        while !self.is_finished() {
            if let Some(cost) = self.step() {
                on_improve(&self.best, cost);
            }
        }
        self.finish()
    }

    /// Runs to the temperature floor.
    pub fn run(self) -> AnnealResult {
        self.run_with(|_, _| {})
    }

    fn finish(self) -> AnnealResult {
        AnnealResult {
            best: self.best,
            best_cost: self.best_cost,
            iterations: self.iteration,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            metrics: self.metrics,
        }
    }
}
