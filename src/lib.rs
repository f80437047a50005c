//! Parallel simulated annealing for the Euclidean Traveling Salesman Problem.
//!
//! - **Cost model** ([`cost`]): points, the pairwise distance matrix and
//!   cyclic tour cost.
//! - **Tours** ([`tour`]): permutation tours, random construction and the
//!   swap move.
//! - **Annealing** ([`anneal`]): temperature calibration, the acceptance
//!   rule and the single-run state machine.
//! - **Parallel search** ([`parallel`]): one worker per cooling factor,
//!   fork-join on a rayon pool, sharing a lock-guarded global best tour.
//! - **I/O** ([`io`]): coordinate file loading and result sinks.
//!
//! # Example
//!
//! ```
//! use u_anneal_tsp::cost::{CostMatrix, Point};
//! use u_anneal_tsp::io::MemorySink;
//! use u_anneal_tsp::parallel::{ParallelConfig, ParallelCoordinator};
//! use u_anneal_tsp::random::create_rng;
//! use u_anneal_tsp::tour::random_permutation;
//!
//! let points: Vec<Point> = (0..12)
//!     .map(|i| {
//!         let a = i as f64 * std::f64::consts::TAU / 12.0;
//!         Point::new(i, a.cos(), a.sin())
//!     })
//!     .collect();
//! let matrix = CostMatrix::from_points(&points)?;
//! let start = random_permutation(matrix.len(), &mut create_rng(7));
//!
//! let config = ParallelConfig::default()
//!     .with_cooling_factors(vec![0.995, 0.997])
//!     .with_seed(7);
//! let result = ParallelCoordinator::new(config).run(&matrix, start, &MemorySink::new())?;
//! assert!(result.best.is_permutation());
//! # Ok::<(), u_anneal_tsp::Error>(())
//! ```

pub mod anneal;
pub mod cli;
pub mod cost;
mod error;
pub mod io;
pub mod logging;
pub mod parallel;
pub mod random;
pub mod tour;

pub use error::{Error, Result};
