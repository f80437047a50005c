//! Single-run simulated annealing over the swap neighbourhood.
//!
//! A run starts from a caller-supplied tour at a calibrated temperature,
//! proposes one random swap per iteration, accepts or reverts it, and
//! cools geometrically until the temperature reaches the floor. The floor
//! is the only stopping condition.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

pub(crate) mod config;
mod runner;
mod schedule;
mod types;

pub use config::{Acceptance, AnnealConfig, DEFAULT_MIN_TEMPERATURE};
pub use runner::{AnnealResult, AnnealRun};
pub use schedule::{
    calibrate_initial_temperature, expected_iterations, initial_temperature_from_costs,
    CALIBRATION_ACCEPTANCE, CALIBRATION_SAMPLES,
};
pub use types::{MetricSample, RunMetrics};
