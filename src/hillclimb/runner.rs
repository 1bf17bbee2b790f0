//! Hill-climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Swap two random slots on one shelf level (candidate is a full copy)
//! 2. Rescore the candidate from scratch
//! 3. Accept only if the candidate's score is strictly greater
//! 4. Repeat from the (possibly just-updated) current layout
//!
//! A batch always runs its full iteration count; there is no convergence
//! cutoff. An iteration with nothing to swap is a no-op.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::HillClimbConfig;
use crate::layout::Layout;
use crate::perturb::{swap_random_pair, PerturbOutcome};
use crate::scoring::LayoutScorer;

/// Result of a single accept-or-reject step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// The layout after the step: the accepted candidate, or a copy equal
    /// to the input when the candidate was rejected.
    pub layout: Layout,

    /// Score of `layout`.
    pub score: f64,

    /// Whether the candidate was accepted.
    pub accepted: bool,

    /// Human-readable account of what happened.
    pub message: String,
}

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct HillClimbResult {
    /// The final layout.
    pub layout: Layout,

    /// Score of `layout`.
    pub score: f64,

    /// Iterations executed (always the configured count).
    pub iterations: usize,

    /// Number of accepted (strictly improving) candidates.
    pub accepted_moves: usize,

    /// Current score after each iteration; non-decreasing.
    pub score_history: Vec<f64>,
}

/// Executes the stochastic hill climb.
///
/// Stateless between invocations: the caller owns the `(Layout, score)`
/// pair and passes it into every call, receiving an updated pair back.
///
/// # Examples
///
/// ```
/// use shelfplan::hillclimb::{HillClimbConfig, HillClimbRunner};
/// use shelfplan::layout::{Fixture, FixtureSet, Layout, Product, ProductCatalog, SlotAssignment};
/// use shelfplan::scoring::LayoutScorer;
///
/// let catalog = ProductCatalog::new([
///     Product { code: "4901".into(), attribute: "tea".into(), name: "green tea".into() },
///     Product { code: "4902".into(), attribute: "cola".into(), name: "cola".into() },
///     Product { code: "4903".into(), attribute: "tea".into(), name: "barley tea".into() },
/// ]);
/// let fixtures = FixtureSet::new([Fixture { id: "1".into(), capacity: 6 }], vec![]);
/// let layout = Layout::new(vec![
///     SlotAssignment { fixture_id: "1".into(), level_id: "1".into(),
///         product_code: "4901".into(), position: 1, face_width: 2 },
///     SlotAssignment { fixture_id: "1".into(), level_id: "1".into(),
///         product_code: "4902".into(), position: 2, face_width: 2 },
///     SlotAssignment { fixture_id: "1".into(), level_id: "1".into(),
///         product_code: "4903".into(), position: 3, face_width: 2 },
/// ]);
///
/// let scorer = LayoutScorer::new(&catalog, &fixtures);
/// let initial = scorer.score(&layout);
/// let config = HillClimbConfig::default().with_iterations(100).with_seed(42);
/// let result = HillClimbRunner::run(&scorer, &layout, initial, &config);
/// assert!(result.score >= initial);
/// ```
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Performs one perturb/score/accept-or-reject cycle.
    ///
    /// The candidate replaces the input only when its score is strictly
    /// greater than `current_score`; otherwise the returned layout is equal
    /// to the input and the score is unchanged. A layout with nothing to
    /// swap is likewise returned unchanged.
    ///
    /// The RNG is caller-supplied: a host driving one swap per UI action
    /// keeps a single RNG across calls, and tests inject a fixed seed.
    pub fn step<R: Rng>(
        scorer: &LayoutScorer<'_>,
        layout: &Layout,
        current_score: f64,
        rng: &mut R,
    ) -> StepResult {
        match swap_random_pair(layout, rng) {
            PerturbOutcome::Swapped { candidate, swap } => {
                let candidate_score = scorer.score(&candidate);
                if candidate_score > current_score {
                    StepResult {
                        layout: candidate,
                        score: candidate_score,
                        accepted: true,
                        message: format!(
                            "{swap}: score improved {current_score:.1} -> {candidate_score:.1}"
                        ),
                    }
                } else {
                    StepResult {
                        layout: layout.clone(),
                        score: current_score,
                        accepted: false,
                        message: format!(
                            "{swap} rejected: score {candidate_score:.1} does not improve on {current_score:.1}"
                        ),
                    }
                }
            }
            PerturbOutcome::NoEligibleTarget => StepResult {
                layout: layout.clone(),
                score: current_score,
                accepted: false,
                message: "no shelf level has two or more products to swap".into(),
            },
        }
    }

    /// Runs `config.iterations` accept-or-reject cycles.
    pub fn run(
        scorer: &LayoutScorer<'_>,
        layout: &Layout,
        current_score: f64,
        config: &HillClimbConfig,
    ) -> HillClimbResult {
        Self::run_with_progress(scorer, layout, current_score, config, |_, _| {})
    }

    /// Runs a batch, invoking `progress` with `(completed, total)` after
    /// each iteration.
    ///
    /// The callback is user feedback only; it cannot stop the run. Each
    /// iteration perturbs the current (possibly just-updated) layout, so
    /// the score is monotonically non-decreasing across the batch.
    pub fn run_with_progress<F>(
        scorer: &LayoutScorer<'_>,
        layout: &Layout,
        current_score: f64,
        config: &HillClimbConfig,
        mut progress: F,
    ) -> HillClimbResult
    where
        F: FnMut(usize, usize),
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = layout.clone();
        let mut score = current_score;
        let mut accepted_moves = 0usize;
        let mut score_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let step = Self::step(scorer, &current, score, &mut rng);
            if step.accepted {
                accepted_moves += 1;
                debug!("iteration {}: {}", iteration + 1, step.message);
            }
            current = step.layout;
            score = step.score;
            score_history.push(score);
            progress(iteration + 1, config.iterations);
        }

        HillClimbResult {
            layout: current,
            score,
            iterations: config.iterations,
            accepted_moves,
            score_history,
        }
    }
}
