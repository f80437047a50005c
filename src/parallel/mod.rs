//! Multi-run parallel annealing with a shared global best.
//!
//! One worker per configured cooling factor runs an [`AnnealRun`] on its
//! own copy of the tour. Workers communicate only through [`GlobalBest`],
//! which they update under a lock whenever their local best improves.
//!
//! [`AnnealRun`]: crate::anneal::AnnealRun

mod config;
mod global_best;
mod runner;

pub use config::{ParallelConfig, DEFAULT_COOLING_FACTORS};
pub use global_best::GlobalBest;
pub use runner::{ParallelCoordinator, SearchResult, WorkerReport};
