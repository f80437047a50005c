//! Random tour construction and the swap move.

use super::types::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random permutation of `0..size`.
pub fn random_permutation<R: Rng>(size: usize, rng: &mut R) -> Tour {
    let mut order: Vec<usize> = (0..size).collect();
    order.shuffle(rng);
    Tour::from_order_unchecked(order)
}

/// Positions exchanged by one [`perturb`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub i: usize,
    pub j: usize,
}

impl Swap {
    /// Undoes the move on the tour it was applied to.
    #[inline]
    pub fn revert(self, tour: &mut Tour) {
        tour.swap(self.i, self.j);
    }

    pub fn is_noop(self) -> bool {
        self.i == self.j
    }
}

/// Swaps two positions drawn uniformly with replacement.
///
/// Drawing the same position twice leaves the tour unchanged.
///
/// # Panics
///
/// Panics if `tour` is empty.
#[inline]
pub fn perturb<R: Rng>(tour: &mut Tour, rng: &mut R) -> Swap {
    let n = tour.len();
    let swap = Swap {
        i: rng.random_range(0..n),
        j: rng.random_range(0..n),
    };
    tour.swap(swap.i, swap.j);
    swap
}
