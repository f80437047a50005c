//! Annealing run configuration and the acceptance rule.

use crate::error::{Error, Result};
use rand::Rng;

/// Temperature at or below which a run stops.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 0.1;

/// Rule deciding whether a cost-worsening candidate replaces the current tour.
///
/// Candidates that do not increase the cost are accepted by every rule
/// without consuming randomness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Accept when `u < exp(-delta / T)` for `u` uniform in `[0, 1)`.
    ///
    /// Worsening moves become rarer as the temperature drops.
    #[default]
    Metropolis,

    /// Accept when `u >= exp(-delta / T)`.
    ///
    /// The complement of [`Acceptance::Metropolis`]: worsening moves are
    /// rare while hot and become almost certain as the run cools.
    Inverted,
}

impl Acceptance {
    /// Decides a move whose cost change is `delta` at `temperature`.
    #[inline]
    pub fn accepts<R: Rng>(self, delta: f64, temperature: f64, rng: &mut R) -> bool {
        if delta <= 0.0 {
            return true;
        }
        let probability = (-delta / temperature).exp();
        let draw: f64 = rng.random_range(0.0..1.0);
        match self {
            Acceptance::Metropolis => draw < probability,
            Acceptance::Inverted => draw >= probability,
        }
    }
}

/// Configuration of one annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::anneal::{Acceptance, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_alpha(0.9994)
///     .with_min_temperature(0.1)
///     .with_acceptance(Acceptance::Metropolis)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Multiplicative cooling factor in (0, 1), applied once per iteration.
    pub alpha: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    pub acceptance: Acceptance,

    /// Seed for the run's own generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9995,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            acceptance: Acceptance::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
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

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        validate_min_temperature(self.min_temperature)
    }
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "cooling factor must be in (0, 1), got {alpha}"
        )))
    }
}

pub(crate) fn validate_min_temperature(t: f64) -> Result<()> {
    if t > 0.0 && t.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "min_temperature must be positive and finite, got {t}"
        )))
    }
}
