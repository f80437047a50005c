//! The tour representation.

use crate::cost::{tour_cost, CostMatrix};
use crate::error::{Error, Result};

/// A visiting order over nodes `0..n`; always a permutation.
///
/// The route is cyclic: the last node connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps `order` after checking that it is a permutation of `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        if !is_permutation(&order) {
            return Err(Error::invalid_input(format!(
                "tour of length {} is not a permutation of 0..{}",
                order.len(),
                order.len()
            )));
        }
        Ok(Self { order })
    }

    /// The tour `0, 1, ..., size - 1`.
    pub fn identity(size: usize) -> Self {
        Self {
            order: (0..size).collect(),
        }
    }

    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order));
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    /// Exchanges the nodes at positions `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// Cyclic cost of this tour under `matrix`.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        tour_cost(&self.order, matrix)
    }

    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order)
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &node in order {
        match seen.get_mut(node) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
