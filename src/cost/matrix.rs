//! Dense pairwise cost matrix and tour evaluation.

use super::point::Point;
use crate::error::{Error, Result};

/// Square, symmetric matrix of non-negative edge costs with a zero diagonal.
///
/// Stored row-major in a single buffer.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    size: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds the Euclidean distance matrix of `points`.
    ///
    /// Node `i` of every tour refers to `points[i]`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `points` is empty, [`Error::InvalidData`]
    /// if a coordinate is not finite.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::invalid_data(format!(
                "point {} has non-finite coordinates ({}, {})",
                p.id, p.x, p.y
            )));
        }

        let size = points.len();
        let mut costs = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = points[i].distance(&points[j]);
                costs[i * size + j] = d;
                costs[j * size + i] = d;
            }
        }
        Ok(Self { size, costs })
    }

    /// Wraps a precomputed matrix.
    ///
    /// An empty `rows` yields the empty matrix. Anything else must be
    /// square, finite, non-negative, symmetric and have a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_data(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            costs.extend(row);
        }
        let matrix = Self { size, costs };

        for i in 0..size {
            if matrix.get(i, i) != 0.0 {
                return Err(Error::invalid_data(format!(
                    "diagonal entry ({i}, {i}) is {}",
                    matrix.get(i, i)
                )));
            }
            for j in 0..size {
                let c = matrix.get(i, j);
                if !c.is_finite() || c < 0.0 {
                    return Err(Error::invalid_data(format!(
                        "entry ({i}, {j}) is {c}, expected a finite non-negative cost"
                    )));
                }
                let mirrored = matrix.get(j, i);
                if (c - mirrored).abs() > 1e-9 * c.abs().max(1.0) {
                    return Err(Error::invalid_data(format!(
                        "entry ({i}, {j}) = {c} differs from ({j}, {i}) = {mirrored}"
                    )));
                }
            }
        }
        Ok(matrix)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cost of the edge `i -> j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.costs[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.costs[i * self.size..(i + 1) * self.size]
    }
}

/// Total cost of visiting `tour` in order and returning to its first node.
///
/// An empty tour costs `0.0`; the search rejects empty instances before
/// any tour is evaluated.
pub fn tour_cost(tour: &[usize], matrix: &CostMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let open: f64 = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    open + matrix.get(last, first)
}
