//! Canonical representation of a cluster.

use serde::Serialize;

use super::cluster::Cluster;
use super::id::{SiteId, UnifiedId};
use super::listing::RawListing;

/// One cluster with a display name, its venue set and a confidence score.
///
/// Read-only after creation.
#[derive(Debug, Clone, Serialize)]
pub struct UnifiedItem {
    id: UnifiedId,
    name: String,
    sites: Vec<SiteId>,
    entries: Vec<RawListing>,
    confidence: f64,
}

impl UnifiedItem {
    /// Build the unified view of `cluster` with an already computed confidence.
    #[must_use]
    pub fn from_cluster(cluster: Cluster, confidence: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence));

        let name = cluster.shortest_name().to_string();
        let sites = cluster.sites();

        Self {
            id: UnifiedId::new(),
            name,
            sites,
            entries: cluster.into_entries(),
            confidence,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &UnifiedId {
        &self.id
    }

    /// Shortest name among the members.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deduplicated venues, first-seen order.
    #[must_use]
    pub fn sites(&self) -> &[SiteId] {
        &self.sites
    }

    #[must_use]
    pub fn entries(&self) -> &[RawListing] {
        &self.entries
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Whether the item is listed more than once and can carry an arbitrage.
    #[must_use]
    pub fn is_multi_entry(&self) -> bool {
        self.entries.len() >= 2
    }
}
