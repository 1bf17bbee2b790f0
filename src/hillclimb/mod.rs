//! Stochastic hill climbing.
//!
//! A greedy single-solution local search: perturb the current layout,
//! rescore the candidate from scratch, and accept it only when the score
//! strictly improves. Worsening candidates are always discarded, so the
//! current score never decreases and the search never escapes a local
//! optimum (no simulated-annealing-style acceptance).
//!
//! Two modes share the same accept-or-reject core: a single step that
//! reports what happened in a human-readable message, and a batch of N
//! steps that reports only the final state plus run statistics.
//!
//! # References
//!
//! - Hoos, H. & Stützle, T. (2004). *Stochastic Local Search: Foundations
//!   and Applications*, chapter 2 (iterative improvement).

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner, StepResult};
