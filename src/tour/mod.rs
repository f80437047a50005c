//! Tours and the swap neighbourhood.

mod sampler;
mod types;

pub use sampler::{perturb, random_permutation, Swap};
pub use types::Tour;
