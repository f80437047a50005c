//! Cost model: points in the plane and the pairwise distance matrix.
//!
//! The matrix is built once from the loaded coordinates and is read-only
//! afterwards, so every worker of the parallel search shares it by
//! reference without synchronization.

mod matrix;
mod point;

pub use matrix::{tour_cost, CostMatrix};
pub use point::Point;
