//! The scoring function.

use super::config::ScoringConfig;
use crate::layout::{FixtureSet, Layout, ProductCatalog};

/// Computes the scalar score of a layout. Higher is better.
///
/// Deterministic: the same layout, catalog, and fixtures always produce the
/// same score, bit for bit. No randomness enters scoring.
#[derive(Debug, Clone)]
pub struct LayoutScorer<'a> {
    catalog: &'a ProductCatalog,
    fixtures: &'a FixtureSet,
    config: ScoringConfig,
}

impl<'a> LayoutScorer<'a> {
    /// Scorer with the default scoring constants.
    pub fn new(catalog: &'a ProductCatalog, fixtures: &'a FixtureSet) -> Self {
        Self::with_config(catalog, fixtures, ScoringConfig::default())
    }

    /// Scorer with custom constants.
    pub fn with_config(
        catalog: &'a ProductCatalog,
        fixtures: &'a FixtureSet,
        config: ScoringConfig,
    ) -> Self {
        config.validate().expect("invalid ScoringConfig");
        Self {
            catalog,
            fixtures,
            config,
        }
    }

    /// The scoring constants in use.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores the layout. An empty layout scores exactly 0.
    ///
    /// Per (fixture, shelf level) group, assignments visited left to right:
    /// each adjacent pair sharing an attribute earns `attribute_bonus`
    /// (plus `identical_bonus` when the codes match), and empty face-widths
    /// beyond `empty_tolerance` cost `empty_penalty` each. Overfull levels
    /// (negative empty space) never trigger the penalty.
    pub fn score(&self, layout: &Layout) -> f64 {
        let mut score = 0.0;

        for (key, slots) in layout.grouped() {
            for pair in slots.windows(2) {
                let left = self.catalog.attribute(&pair[0].product_code);
                let right = self.catalog.attribute(&pair[1].product_code);
                if left == right {
                    score += self.config.attribute_bonus;
                    if pair[0].product_code == pair[1].product_code {
                        score += self.config.identical_bonus;
                    }
                }
            }

            // Empty-space term only when the fixture's capacity is known.
            if let Some(capacity) = self.fixtures.capacity(&key.fixture_id) {
                let used: u32 = slots.iter().map(|slot| slot.face_width).sum();
                let empty = i64::from(capacity) - i64::from(used);
                let tolerance = i64::from(self.config.empty_tolerance);
                if empty > tolerance {
                    score -= self.config.empty_penalty * (empty - tolerance) as f64;
                }
            }
        }

        score
    }
}
