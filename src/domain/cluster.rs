//! Groups of listings believed to denote the same real-world event.

use serde::Serialize;

use super::id::SiteId;
use super::listing::RawListing;

/// An ordered, non-empty group of listings.
///
/// Members keep their insertion order. Clusters only grow while the
/// clustering engine runs; once handed out they are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cluster {
    entries: Vec<RawListing>,
}

impl Cluster {
    /// Start a cluster with its first member.
    #[must_use]
    pub fn singleton(first: RawListing) -> Self {
        Self {
            entries: vec![first],
        }
    }

    pub(crate) fn push(&mut self, listing: RawListing) {
        self.entries.push(listing);
    }

    /// Members in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[RawListing] {
        &self.entries
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for clusters built by the engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cluster holds exactly one listing.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.entries.len() == 1
    }

    /// Distinct venues in order of first appearance.
    #[must_use]
    pub fn sites(&self) -> Vec<SiteId> {
        let mut sites: Vec<SiteId> = Vec::new();
        for entry in &self.entries {
            if !sites.contains(entry.site()) {
                sites.push(entry.site().clone());
            }
        }
        sites
    }

    /// The member name with the fewest characters, earliest member winning ties.
    #[must_use]
    pub fn shortest_name(&self) -> &str {
        self.entries
            .iter()
            .map(|entry| (entry.name(), entry.name().chars().count()))
            .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
            .map(|(name, _)| name)
            .unwrap_or_default()
    }

    /// Consume the cluster, yielding its members.
    #[must_use]
    pub fn into_entries(self) -> Vec<RawListing> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing(site: &str, name: &str) -> RawListing {
        RawListing::try_new(site, name, dec!(0.5), "https://example.com/m").unwrap()
    }

    #[test]
    fn sites_are_deduplicated_in_first_seen_order() {
        let mut cluster = Cluster::singleton(listing("kalshi", "a"));
        cluster.push(listing("polymarket", "b"));
        cluster.push(listing("kalshi", "c"));

        let sites = cluster.sites();
        assert_eq!(sites, vec![SiteId::from("kalshi"), SiteId::from("polymarket")]);
    }

    #[test]
    fn shortest_name_prefers_earliest_on_tie() {
        let mut cluster = Cluster::singleton(listing("kalshi", "Trump wins"));
        cluster.push(listing("polymarket", "Trump 2024"));
        cluster.push(listing("polymarket", "Trump"));
        cluster.push(listing("polymarket", "Vance"));

        assert_eq!(cluster.shortest_name(), "Trump");
    }

    #[test]
    fn shortest_name_counts_characters_not_bytes() {
        let mut cluster = Cluster::singleton(listing("kalshi", "Trump 2027 xyz"));
        cluster.push(listing("polymarket", "Éé Trump 2027"));

        assert_eq!(cluster.shortest_name(), "Éé Trump 2027");
    }

    #[test]
    fn shortest_name_ties_on_characters_keep_earliest() {
        let mut cluster = Cluster::singleton(listing("kalshi", "Élection 2028"));
        cluster.push(listing("polymarket", "Election 2028"));

        assert_eq!(cluster.shortest_name(), "Élection 2028");
    }

    #[test]
    fn singleton_reports_size_one() {
        let cluster = Cluster::singleton(listing("kalshi", "a"));
        assert!(cluster.is_singleton());
        assert_eq!(cluster.len(), 1);
        assert!(!cluster.is_empty());
    }
}
