//! The tour shared by all workers.

use crate::cost::CostMatrix;
use crate::tour::Tour;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

struct Inner {
    tour: Tour,
    cost: f64,
    history: Vec<f64>,
}

/// Lowest-cost tour found by any worker.
///
/// Replacement is a single read-compare-write under one lock, so a worker
/// holding a stale view can never overwrite a better tour with a worse one.
/// The stored cost is therefore non-increasing for the lifetime of the value.
pub struct GlobalBest<'a> {
    matrix: &'a CostMatrix,
    inner: Mutex<Inner>,
}

impl<'a> GlobalBest<'a> {
    pub fn new(tour: Tour, matrix: &'a CostMatrix) -> Self {
        let cost = tour.cost(matrix);
        Self {
            matrix,
            inner: Mutex::new(Inner {
                tour,
                cost,
                history: vec![cost],
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Inner is only written after a complete comparison, so a panic in
        // another worker cannot leave it half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the global best with `candidate` if it is strictly cheaper.
    ///
    /// Both costs are recomputed from the tours while the lock is held.
    /// Returns `true` when the candidate was installed.
    pub fn offer(&self, candidate: &Tour) -> bool {
        let mut inner = self.lock();
        let candidate_cost = candidate.cost(self.matrix);
        let current_cost = inner.tour.cost(self.matrix);
        if candidate_cost < current_cost {
            inner.tour.clone_from(candidate);
            inner.cost = candidate_cost;
            inner.history.push(candidate_cost);
            debug!(cost = candidate_cost, previous = current_cost, "global best improved");
            true
        } else {
            false
        }
    }

    /// Copy of the current global best and its cost.
    pub fn snapshot(&self) -> (Tour, f64) {
        let inner = self.lock();
        (inner.tour.clone(), inner.cost)
    }

    pub fn cost(&self) -> f64 {
        self.lock().cost
    }

    /// Cost of the global best after each successful replacement,
    /// starting with the initial tour's cost.
    pub fn history(&self) -> Vec<f64> {
        self.lock().history.clone()
    }

    pub fn into_inner(self) -> (Tour, f64) {
        let inner = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        (inner.tour, inner.cost)
    }
}
