//! Move description types for the perturbation operator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// A single two-slot swap, identified by the shelf level it happened on and
/// the two product codes whose positions were exchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwapMove {
    /// Fixture the swap happened on.
    pub fixture_id: String,
    /// Shelf level within the fixture.
    pub level_id: String,
    /// One of the two products exchanged.
    pub first_product: String,
    /// The other product exchanged.
    pub second_product: String,
}

impl fmt::Display for SwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swapped {} and {} on fixture {} level {}",
            self.first_product, self.second_product, self.fixture_id, self.level_id
        )
    }
}

/// Outcome of one perturbation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerturbOutcome {
    /// A candidate layout was produced.
    Swapped {
        /// The perturbed copy; the input layout is untouched.
        candidate: Layout,
        /// Which slots were exchanged.
        swap: SwapMove,
    },
    /// No shelf level has two or more assignments.
    NoEligibleTarget,
}
