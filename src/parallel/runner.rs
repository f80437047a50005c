//! Fork-join execution of the annealing workers.

use super::config::ParallelConfig;
use super::global_best::GlobalBest;
use crate::anneal::{calibrate_initial_temperature, AnnealRun};
use crate::cost::CostMatrix;
use crate::error::{Error, Result};
use crate::io::ResultSink;
use crate::random::rng_from;
use crate::tour::Tour;
use tracing::{debug, info, warn};

/// Summary of one worker's run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReport {
    pub worker: usize,
    pub alpha: f64,
    /// Cost of the tour the worker started from.
    pub start_cost: f64,
    /// Best cost the worker reached on its own.
    pub best_cost: f64,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
}

/// Outcome of a parallel search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Lowest-cost tour found by any worker.
    pub best: Tour,
    pub best_cost: f64,
    /// Temperature every worker started at.
    pub initial_temperature: f64,
    /// Costs of the global best after each improvement, oldest first.
    pub improvements: Vec<f64>,
    /// Per-worker summaries, ordered by worker index.
    pub workers: Vec<WorkerReport>,
}

/// Runs one annealing worker per cooling factor and merges their results.
///
/// # Usage
///
/// ```
/// use u_anneal_tsp::cost::{CostMatrix, Point};
/// use u_anneal_tsp::io::MemorySink;
/// use u_anneal_tsp::parallel::{ParallelConfig, ParallelCoordinator};
/// use u_anneal_tsp::tour::Tour;
///
/// let points = [
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 0.0, 1.0),
///     Point::new(4, 1.0, 0.0),
/// ];
/// let matrix = CostMatrix::from_points(&points).unwrap();
/// let config = ParallelConfig::default()
///     .with_cooling_factors(vec![0.99, 0.995])
///     .with_seed(1);
/// let sink = MemorySink::new();
/// let result = ParallelCoordinator::new(config)
///     .run(&matrix, Tour::identity(4), &sink)
///     .unwrap();
/// assert_eq!(result.best_cost, 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParallelCoordinator {
    config: ParallelConfig,
}

impl ParallelCoordinator {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Searches from `initial` and returns the best tour any worker found.
    ///
    /// Every worker's trajectory is handed to `sink`; a sink failure is
    /// logged and does not abort the search.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] for an empty matrix, [`Error::InvalidInput`]
    /// if `initial` is not a tour over the matrix's nodes, and
    /// [`Error::InvalidConfig`] for an invalid configuration.
    pub fn run(
        &self,
        matrix: &CostMatrix,
        initial: Tour,
        sink: &dyn ResultSink,
    ) -> Result<SearchResult> {
        self.config.validate()?;
        if matrix.is_empty() {
            return Err(Error::EmptyInput);
        }
        if initial.len() != matrix.len() || !initial.is_permutation() {
            return Err(Error::invalid_input(format!(
                "initial tour has {} nodes, matrix has {}",
                initial.len(),
                matrix.len()
            )));
        }

        let initial_temperature = match self.config.initial_temperature {
            Some(t) => t,
            None => {
                let mut rng = rng_from(self.config.seed);
                calibrate_initial_temperature(matrix, &initial, &mut rng)
            }
        };
        let workers = self.config.workers();
        info!(
            nodes = matrix.len(),
            workers,
            initial_temperature,
            "starting parallel annealing"
        );

        let global = GlobalBest::new(initial, matrix);
        let (start, start_cost) = global.snapshot();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("anneal-{i}"))
            .build()?;

        // One run per pool thread, all seeded from the launch snapshot.
        let outcomes: Vec<Result<(WorkerReport, Tour)>> = pool.broadcast(|ctx| {
            self.run_worker(
                ctx.index(),
                matrix,
                initial_temperature,
                (&start, start_cost),
                &global,
                sink,
            )
        });
        let outcomes = outcomes.into_iter().collect::<Result<Vec<_>>>()?;

        let improvements = global.history();
        let (mut best, best_cost) = global.into_inner();
        // Equal-cost finds resolve to the lowest worker index, not to
        // whichever offer took the lock first.
        if let Some((_, tour)) = outcomes
            .iter()
            .find(|(report, _)| report.best_cost == best_cost && report.best_cost < start_cost)
        {
            best.clone_from(tour);
        }
        let workers = outcomes.into_iter().map(|(report, _)| report).collect();

        info!(best_cost, improvements = improvements.len() - 1, "parallel annealing finished");
        Ok(SearchResult {
            best,
            best_cost,
            initial_temperature,
            improvements,
            workers,
        })
    }

    fn run_worker(
        &self,
        worker: usize,
        matrix: &CostMatrix,
        initial_temperature: f64,
        (start, start_cost): (&Tour, f64),
        global: &GlobalBest<'_>,
        sink: &dyn ResultSink,
    ) -> Result<(WorkerReport, Tour)> {
        let config = self.config.worker_config(worker);
        debug!(worker, alpha = config.alpha, start_cost, "worker started");

        let result = AnnealRun::new(matrix, start.clone(), initial_temperature, &config)?
            .run_with(|tour, _| {
                global.offer(tour);
            });

        if let Err(err) = sink.record_run(worker, &result.metrics) {
            warn!(worker, error = %err, "failed to record worker trajectory");
        }
        debug!(
            worker,
            best_cost = result.best_cost,
            iterations = result.iterations,
            "worker finished"
        );

        let report = WorkerReport {
            worker,
            alpha: config.alpha,
            start_cost,
            best_cost: result.best_cost,
            iterations: result.iterations,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
        };
        Ok((report, result.best))
    }
}
