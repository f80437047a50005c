//! File input and output around the search.
//!
//! - [`loader`]: reads TSPLIB-style `NODE_COORD_SECTION` coordinate files.
//! - [`sink`]: receives per-worker trajectories and the final tour.

pub mod loader;
pub mod sink;

pub use loader::{load_cost_matrix, load_points, parse_points};
pub use sink::{FileSink, MemorySink, ResultSink};
