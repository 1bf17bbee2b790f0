//! Candidate generation by random two-slot swaps.
//!
//! One perturbation exchanges the ordinal positions of two randomly chosen
//! slots on one randomly chosen shelf level. Face-widths and attributes
//! travel with the product, not the position. The input layout is never
//! modified; the candidate is a fresh copy.
//!
//! A layout where no shelf level holds at least two products has nothing to
//! swap. That is a normal outcome ([`PerturbOutcome::NoEligibleTarget`]),
//! not an error.

mod operator;
mod types;

pub use operator::swap_random_pair;
pub use types::{PerturbOutcome, SwapMove};
