//! Greedy single-linkage clustering of listings.

use std::collections::HashSet;

use crate::domain::similarity::{jaccard, tokens};
use crate::domain::{Cluster, RawListing};

/// Partitions listings into clusters of lexically similar names.
///
/// The algorithm is greedy and order-dependent. Listings are taken in input
/// order; each one joins the first existing cluster (creation order) holding
/// any member (insertion order) whose similarity to it is at least the
/// threshold. Otherwise it opens a new cluster. This is first-match, not
/// best-match, and membership is not transitively merged afterwards, so the
/// same listings supplied in a different order can partition differently.
#[derive(Debug, Clone, Copy)]
pub struct ClusteringEngine {
    threshold: f64,
}

impl ClusteringEngine {
    /// Create an engine that links listings scoring at least `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Partition `listings` into clusters.
    ///
    /// Every listing ends up in exactly one cluster. Empty input yields no
    /// clusters.
    #[must_use]
    pub fn cluster(&self, listings: Vec<RawListing>) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = Vec::new();
        // Token sets parallel to `clusters`, one per member.
        let mut member_tokens: Vec<Vec<HashSet<String>>> = Vec::new();

        for listing in listings {
            let candidate = tokens(listing.name());

            let target = member_tokens.iter().position(|members| {
                members
                    .iter()
                    .any(|member| jaccard(&candidate, member) >= self.threshold)
            });

            match target {
                Some(index) => {
                    clusters[index].push(listing);
                    member_tokens[index].push(candidate);
                }
                None => {
                    clusters.push(Cluster::singleton(listing));
                    member_tokens.push(vec![candidate]);
                }
            }
        }

        clusters
    }
}
