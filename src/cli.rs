//! Command-line surface of the `u-anneal-tsp` binary.

use crate::anneal::{Acceptance, DEFAULT_MIN_TEMPERATURE};
use crate::parallel::{ParallelConfig, DEFAULT_COOLING_FACTORS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "u-anneal-tsp")]
#[command(author, version, about = "Parallel simulated annealing for Euclidean TSP instances")]
pub struct Cli {
    /// Coordinate file with a NODE_COORD_SECTION block
    pub input: PathBuf,

    /// Directory receiving one thread<N>.txt trajectory file per worker
    pub dest: PathBuf,

    /// Cooling factor of each worker, one worker per value
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_COOLING_FACTORS.to_vec()
    )]
    pub cooling_factors: Vec<f64>,

    /// Temperature at which every worker stops
    #[arg(long, default_value_t = DEFAULT_MIN_TEMPERATURE)]
    pub min_temperature: f64,

    /// Skip calibration and start every worker at this temperature
    #[arg(long)]
    pub initial_temperature: Option<f64>,

    /// Rule for accepting cost-worsening swaps
    #[arg(long, value_enum, default_value_t = AcceptanceArg::Metropolis)]
    pub acceptance: AcceptanceArg,

    /// Seed for reproducible runs; entropy is used when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also append the best tour to <DEST>/best_tour.txt
    #[arg(long)]
    pub save_best: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceArg {
    Metropolis,
    Inverted,
}

impl From<AcceptanceArg> for Acceptance {
    fn from(value: AcceptanceArg) -> Self {
        match value {
            AcceptanceArg::Metropolis => Acceptance::Metropolis,
            AcceptanceArg::Inverted => Acceptance::Inverted,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl Cli {
    /// Search configuration described by the flags.
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig {
            cooling_factors: self.cooling_factors.clone(),
            min_temperature: self.min_temperature,
            acceptance: self.acceptance.into(),
            initial_temperature: self.initial_temperature,
            seed: self.seed,
        }
    }
}
