//! Intra-cluster confidence scoring.

use crate::domain::similarity::{jaccard, tokens};
use crate::domain::Cluster;

/// Scores how likely a cluster's members denote the same event.
///
/// Singletons score `1.0`. Larger clusters score the mean pairwise
/// similarity over all unordered member pairs plus a fixed bonus, capped
/// at `1.0`. The score does not depend on member order.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScorer {
    bonus: f64,
}

impl ConfidenceScorer {
    #[must_use]
    pub const fn new(bonus: f64) -> Self {
        Self { bonus }
    }

    #[must_use]
    pub const fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Confidence for `cluster`, in `[0, 1]`.
    #[must_use]
    pub fn score(&self, cluster: &Cluster) -> f64 {
        if cluster.len() < 2 {
            return 1.0;
        }

        let token_sets: Vec<_> = cluster.entries().iter().map(|e| tokens(e.name())).collect();

        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, left) in token_sets.iter().enumerate() {
            for right in &token_sets[i + 1..] {
                total += jaccard(left, right);
                pairs += 1;
            }
        }

        (total / pairs as f64 + self.bonus).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{cluster_of, named};

    const EPS: f64 = 1e-12;

    fn cluster(names: &[&str]) -> Cluster {
        cluster_of(names.iter().map(|name| named("site", name)).collect())
    }

    #[test]
    fn singleton_scores_exactly_one() {
        let scorer = ConfidenceScorer::new(0.2);
        assert_eq!(scorer.score(&cluster(&["anything at all"])), 1.0);
    }

    #[test]
    fn pair_scores_similarity_plus_bonus() {
        let scorer = ConfidenceScorer::new(0.2);
        let score = scorer.score(&cluster(&[
            "Trump wins 2024 Presidential Election",
            "Trump 2024 Election Victory",
        ]));
        assert!((score - 0.7).abs() < EPS);
    }

    #[test]
    fn score_averages_all_pairs() {
        // a b / b c: 1/3, a b / a b: 1, b c / a b: 1/3 -> mean 5/9
        let scorer = ConfidenceScorer::new(0.2);
        let score = scorer.score(&cluster(&["a b", "b c", "a b"]));
        assert!((score - (5.0 / 9.0 + 0.2)).abs() < EPS);
    }

    #[test]
    fn score_is_capped_at_one() {
        let scorer = ConfidenceScorer::new(0.2);
        let score = scorer.score(&cluster(&["same name", "Same Name"]));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn score_ignores_member_order() {
        let scorer = ConfidenceScorer::new(0.2);
        let forward = scorer.score(&cluster(&["a b c", "b c d", "c d e", "a e"]));
        let backward = scorer.score(&cluster(&["a e", "c d e", "b c d", "a b c"]));
        assert!((forward - backward).abs() < EPS);
    }

    #[test]
    fn zero_bonus_leaves_mean_untouched() {
        let scorer = ConfidenceScorer::new(0.0);
        let score = scorer.score(&cluster(&["x y", "y z"]));
        assert!((score - 1.0 / 3.0).abs() < EPS);
    }
}
