//! Cross-venue product unification.
//!
//! - [`ClusteringEngine`] - groups listings by name similarity
//! - [`ConfidenceScorer`] - rates each group
//! - [`analyze`] - spread and profit for multi-venue groups
//! - [`UnifyService`] - runs the stages over a batch

mod arbitrage;
mod confidence;
mod engine;
mod service;

pub use arbitrage::{analyze, analyze_all};
pub use confidence::ConfidenceScorer;
pub use engine::ClusteringEngine;
pub use service::UnifyService;

/// Default minimum similarity for two listings to be linked.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default bonus added to the mean pairwise similarity of a cluster.
pub const DEFAULT_CONFIDENCE_BONUS: f64 = 0.2;

/// Parameters of the unification pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnifyConfig {
    /// Minimum similarity for linking a listing to a cluster member.
    pub threshold: f64,
    /// Added to mean pairwise similarity for multi-member clusters.
    pub confidence_bonus: f64,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            confidence_bonus: DEFAULT_CONFIDENCE_BONUS,
        }
    }
}
