//! Property tests for the scoring, perturbation, and optimizer contracts.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shelfplan::hillclimb::{HillClimbConfig, HillClimbRunner};
use shelfplan::layout::{
    Fixture, FixtureSet, Layout, LevelKey, Product, ProductCatalog, ShelfLevel, SlotAssignment,
};
use shelfplan::perturb::{swap_random_pair, PerturbOutcome};
use shelfplan::scoring::LayoutScorer;

const ATTRIBUTES: [&str; 3] = ["tea", "cola", "water"];

fn catalog() -> ProductCatalog {
    ProductCatalog::new((0..6).map(|i| Product {
        code: format!("P{i}"),
        attribute: ATTRIBUTES[i % ATTRIBUTES.len()].to_string(),
        name: format!("product {i}"),
    }))
}

fn fixtures() -> FixtureSet {
    let levels = (0..3)
        .flat_map(|f| {
            (0..2).map(move |l| ShelfLevel {
                fixture_id: format!("F{f}"),
                level_id: format!("L{l}"),
            })
        })
        .collect();
    FixtureSet::new(
        (0..3).map(|f| Fixture {
            id: format!("F{f}"),
            capacity: 10,
        }),
        levels,
    )
}

prop_compose! {
    /// Up to a dozen slots spread over 3 fixtures x 2 levels, drawing from
    /// 6 catalog products. The row index doubles as the position, so
    /// positions within a level are unique by construction.
    fn arb_layout()(rows in prop::collection::vec((0u32..3, 0u32..2, 0u32..6, 1u32..4), 0..12)) -> Layout {
        let assignments = rows
            .iter()
            .enumerate()
            .map(|(index, &(fixture, level, product, width))| SlotAssignment {
                fixture_id: format!("F{fixture}"),
                level_id: format!("L{level}"),
                product_code: format!("P{product}"),
                position: index as u32,
                face_width: width,
            })
            .collect();
        Layout::new(assignments)
    }
}

/// Rebuilds the layout with the positions of two slots of one level
/// exchanged. Slots are addressed by their rank within the level.
fn swap_positions(layout: &Layout, key: &LevelKey, first: usize, second: usize) -> Layout {
    let mut assignments = layout.assignments().to_vec();
    let indices: Vec<usize> = assignments
        .iter()
        .enumerate()
        .filter(|(_, a)| a.fixture_id == key.fixture_id && a.level_id == key.level_id)
        .map(|(i, _)| i)
        .collect();
    let (a, b) = (indices[first], indices[second]);
    let position = assignments[a].position;
    assignments[a].position = assignments[b].position;
    assignments[b].position = position;
    Layout::new(assignments)
}

proptest! {
    #[test]
    fn double_swap_restores_layout_and_score(
        layout in arb_layout(),
        group_pick in any::<prop::sample::Index>(),
        first_pick in any::<prop::sample::Index>(),
        second_pick in any::<prop::sample::Index>(),
    ) {
        let catalog = catalog();
        let fixtures = fixtures();
        let scorer = LayoutScorer::new(&catalog, &fixtures);

        let groups = layout.grouped();
        let eligible: Vec<&LevelKey> = groups
            .iter()
            .filter(|(_, slots)| slots.len() >= 2)
            .map(|(key, _)| key)
            .collect();
        prop_assume!(!eligible.is_empty());

        let key = eligible[group_pick.index(eligible.len())];
        let len = groups[key].len();
        let first = first_pick.index(len);
        let second = second_pick.index(len - 1);
        let second = if second >= first { second + 1 } else { second };

        let swapped = swap_positions(&layout, key, first, second);
        let restored = swap_positions(&swapped, key, first, second);

        prop_assert_eq!(&restored, &layout);
        prop_assert_eq!(scorer.score(&restored), scorer.score(&layout));
    }

    #[test]
    fn perturbation_preserves_level_contents(layout in arb_layout(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        match swap_random_pair(&layout, &mut rng) {
            PerturbOutcome::Swapped { candidate, swap } => {
                prop_assert_eq!(candidate.len(), layout.len());

                let before = layout.grouped();
                let after = candidate.grouped();
                prop_assert_eq!(before.len(), after.len());
                for (key, slots) in &before {
                    let mut original: Vec<(&str, u32)> = slots
                        .iter()
                        .map(|s| (s.product_code.as_str(), s.face_width))
                        .collect();
                    let mut permuted: Vec<(&str, u32)> = after[key]
                        .iter()
                        .map(|s| (s.product_code.as_str(), s.face_width))
                        .collect();
                    original.sort_unstable();
                    permuted.sort_unstable();
                    prop_assert_eq!(original, permuted);
                }

                prop_assert!(before[&LevelKey {
                    fixture_id: swap.fixture_id.clone(),
                    level_id: swap.level_id.clone(),
                }].len() >= 2);
            }
            PerturbOutcome::NoEligibleTarget => {
                // Only legal when every level holds at most one slot.
                for slots in layout.grouped().values() {
                    prop_assert!(slots.len() < 2);
                }
            }
        }
    }

    #[test]
    fn step_rejects_or_strictly_improves(layout in arb_layout(), seed in any::<u64>()) {
        let catalog = catalog();
        let fixtures = fixtures();
        let scorer = LayoutScorer::new(&catalog, &fixtures);
        let initial = scorer.score(&layout);

        let mut rng = StdRng::seed_from_u64(seed);
        let step = HillClimbRunner::step(&scorer, &layout, initial, &mut rng);

        if step.accepted {
            prop_assert!(step.score > initial);
            prop_assert_eq!(step.score, scorer.score(&step.layout));
        } else {
            prop_assert_eq!(&step.layout, &layout);
            prop_assert_eq!(step.score, initial);
        }
    }

    #[test]
    fn batch_is_monotone_and_consistent(
        layout in arb_layout(),
        seed in any::<u64>(),
        iterations in 0usize..25,
    ) {
        let catalog = catalog();
        let fixtures = fixtures();
        let scorer = LayoutScorer::new(&catalog, &fixtures);
        let initial = scorer.score(&layout);

        let config = HillClimbConfig::default()
            .with_iterations(iterations)
            .with_seed(seed);
        let result = HillClimbRunner::run(&scorer, &layout, initial, &config);

        prop_assert_eq!(result.iterations, iterations);
        prop_assert_eq!(result.score_history.len(), iterations);
        prop_assert!(result.score >= initial);
        prop_assert_eq!(result.score, scorer.score(&result.layout));

        let mut previous = initial;
        for &score in &result.score_history {
            prop_assert!(score >= previous);
            previous = score;
        }
    }
}
