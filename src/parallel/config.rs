//! Parallel search configuration.

use crate::anneal::config::{validate_alpha, validate_min_temperature, DEFAULT_MIN_TEMPERATURE};
use crate::anneal::{Acceptance, AnnealConfig};
use crate::error::{Error, Result};
use crate::random::worker_seed;

/// Tuned cooling factors, one worker each.
pub const DEFAULT_COOLING_FACTORS: [f64; 6] = [0.9998, 0.9990, 0.9992, 0.9994, 0.9996, 0.9998];

/// Configuration for [`ParallelCoordinator`](super::ParallelCoordinator).
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::parallel::ParallelConfig;
///
/// let config = ParallelConfig::default()
///     .with_cooling_factors(vec![0.999, 0.9995])
///     .with_seed(42);
/// assert_eq!(config.workers(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// One worker is launched per entry, in this order.
    pub cooling_factors: Vec<f64>,

    /// Temperature floor shared by every worker.
    pub min_temperature: f64,

    pub acceptance: Acceptance,

    /// Overrides the calibrated initial temperature when set.
    pub initial_temperature: Option<f64>,

    /// Base seed. Calibration and each worker derive their own seed from it.
    pub seed: Option<u64>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            cooling_factors: DEFAULT_COOLING_FACTORS.to_vec(),
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            acceptance: Acceptance::default(),
            initial_temperature: None,
            seed: None,
        }
    }
}

impl ParallelConfig {
    pub fn with_cooling_factors(mut self, factors: Vec<f64>) -> Self {
        self.cooling_factors = factors;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of concurrent workers.
    pub fn workers(&self) -> usize {
        self.cooling_factors.len()
    }

    /// Run configuration of worker `index`.
    pub fn worker_config(&self, index: usize) -> AnnealConfig {
        AnnealConfig {
            alpha: self.cooling_factors[index],
            min_temperature: self.min_temperature,
            acceptance: self.acceptance,
            seed: worker_seed(self.seed, index),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cooling_factors.is_empty() {
            return Err(Error::invalid_config("at least one cooling factor is required"));
        }
        for &alpha in &self.cooling_factors {
            validate_alpha(alpha)?;
        }
        validate_min_temperature(self.min_temperature)?;
        if let Some(t) = self.initial_temperature {
            if !t.is_finite() || t < 0.0 {
                return Err(Error::invalid_config(format!(
                    "initial temperature must be finite and non-negative, got {t}"
                )));
            }
        }
        Ok(())
    }
}
