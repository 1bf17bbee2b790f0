//! Criterion benchmarks for layout scoring and batch optimization.
//!
//! Uses a synthetic shelf: a handful of fixtures with several levels each,
//! filled with products cycling through a few attributes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shelfplan::hillclimb::{HillClimbConfig, HillClimbRunner};
use shelfplan::layout::{Fixture, FixtureSet, Layout, Product, ProductCatalog, SlotAssignment};
use shelfplan::scoring::LayoutScorer;

const ATTRIBUTES: [&str; 4] = ["tea", "cola", "water", "juice"];

fn synthetic(fixture_count: usize, levels_per_fixture: usize, slots_per_level: usize) -> (ProductCatalog, FixtureSet, Layout) {
    let catalog = ProductCatalog::new((0..16).map(|i| Product {
        code: format!("P{i}"),
        attribute: ATTRIBUTES[i % ATTRIBUTES.len()].to_string(),
        name: format!("product {i}"),
    }));

    let fixtures = FixtureSet::new(
        (0..fixture_count).map(|f| Fixture {
            id: format!("F{f}"),
            capacity: (slots_per_level * 2) as u32,
        }),
        vec![],
    );

    let mut assignments = Vec::new();
    for f in 0..fixture_count {
        for l in 0..levels_per_fixture {
            for s in 0..slots_per_level {
                assignments.push(SlotAssignment {
                    fixture_id: format!("F{f}"),
                    level_id: format!("L{l}"),
                    product_code: format!("P{}", (f * 7 + l * 3 + s) % 16),
                    position: s as u32,
                    face_width: 1 + (s % 2) as u32,
                });
            }
        }
    }

    (catalog, fixtures, Layout::new(assignments))
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    for &slots_per_level in &[4usize, 8, 16] {
        let (catalog, fixtures, layout) = synthetic(4, 4, slots_per_level);
        let scorer = LayoutScorer::new(&catalog, &fixtures);
        group.bench_with_input(
            BenchmarkId::from_parameter(slots_per_level),
            &slots_per_level,
            |b, _| b.iter(|| black_box(scorer.score(&layout))),
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let (catalog, fixtures, layout) = synthetic(4, 4, 8);
    let scorer = LayoutScorer::new(&catalog, &fixtures);
    let initial = scorer.score(&layout);
    let config = HillClimbConfig::default().with_iterations(1000).with_seed(42);

    c.bench_function("hillclimb_1000", |b| {
        b.iter(|| black_box(HillClimbRunner::run(&scorer, &layout, initial, &config)))
    });
}

criterion_group!(benches, bench_score, bench_batch);
criterion_main!(benches);
