//! Unification engine configuration.
//!
//! Both parameters are heuristics without a derivation; the defaults
//! reproduce the historical behaviour.

use serde::Deserialize;

use crate::application::unify::{
    UnifyConfig as CoreConfig, DEFAULT_CONFIDENCE_BONUS, DEFAULT_THRESHOLD,
};

/// Configuration for clustering and confidence scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct UnifyConfig {
    /// Minimum token-set similarity for two listings to be linked.
    ///
    /// Must be within `[0, 1]`. Defaults to 0.3.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Bonus added to a cluster's mean pairwise similarity.
    ///
    /// Must be within `[0, 1]`. Defaults to 0.2.
    #[serde(default = "default_confidence_bonus")]
    pub confidence_bonus: f64,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            confidence_bonus: default_confidence_bonus(),
        }
    }
}

impl UnifyConfig {
    /// Convert to the core service configuration type.
    #[must_use]
    pub const fn to_core_config(&self) -> CoreConfig {
        CoreConfig {
            threshold: self.threshold,
            confidence_bonus: self.confidence_bonus,
        }
    }
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

const fn default_confidence_bonus() -> f64 {
    DEFAULT_CONFIDENCE_BONUS
}
