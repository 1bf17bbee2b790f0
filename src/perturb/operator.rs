//! The random two-slot swap.

use rand::Rng;

use super::types::{PerturbOutcome, SwapMove};
use crate::layout::Layout;

/// Produces a candidate layout by swapping two random slots on one shelf
/// level.
///
/// Picks uniformly among the levels holding at least two assignments, then
/// uniformly among distinct slot pairs of that level, and exchanges the two
/// ordinal positions. The RNG is caller-supplied so seeded runs reproduce
/// the exact same swap sequence.
pub fn swap_random_pair<R: Rng>(layout: &Layout, rng: &mut R) -> PerturbOutcome {
    let eligible: Vec<_> = layout
        .grouped_indices()
        .into_iter()
        .filter(|(_, indices)| indices.len() >= 2)
        .collect();

    if eligible.is_empty() {
        return PerturbOutcome::NoEligibleTarget;
    }

    let (key, indices) = &eligible[rng.random_range(0..eligible.len())];

    // Two distinct slots, uniform over unordered pairs.
    let first = rng.random_range(0..indices.len());
    let mut second = rng.random_range(0..indices.len() - 1);
    if second >= first {
        second += 1;
    }

    let mut assignments = layout.assignments().to_vec();
    let (a, b) = (indices[first], indices[second]);
    let position = assignments[a].position;
    assignments[a].position = assignments[b].position;
    assignments[b].position = position;

    let swap = SwapMove {
        fixture_id: key.fixture_id.clone(),
        level_id: key.level_id.clone(),
        first_product: assignments[a].product_code.clone(),
        second_product: assignments[b].product_code.clone(),
    };

    PerturbOutcome::Swapped {
        candidate: Layout::new(assignments),
        swap,
    }
}
