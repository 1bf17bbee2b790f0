//! Layout scoring.
//!
//! A pure function of layout content: per shelf level, adjacent products
//! sharing a categorical attribute earn a bonus (more when they are the
//! same product), and empty face-widths beyond a slack tolerance are
//! penalized. The whole layout is rescored from scratch on every call;
//! there is no incremental update.

mod config;
mod engine;

pub use config::ScoringConfig;
pub use engine::LayoutScorer;
