//! Unification pipeline.
//!
//! ```text
//! ListingRecord --validate--> RawListing --ClusteringEngine--> Cluster
//!                                                                |
//!                                         ConfidenceScorer ------+
//!                                                                v
//!                          SummaryStats <-- UnifiedItem --analyze--> ArbitrageRecord
//! ```
//!
//! Each call processes one batch and holds no state between calls.

use chrono::Utc;
use tracing::{debug, info};

use super::arbitrage::analyze_all;
use super::confidence::ConfidenceScorer;
use super::engine::ClusteringEngine;
use super::UnifyConfig;
use crate::domain::{ListingRecord, RawListing, SummaryStats, UnificationReport, UnifiedItem};
use crate::error::{Error, Result};

/// Runs the validate, cluster, score and analyze stages over a batch.
#[derive(Debug, Clone)]
pub struct UnifyService {
    engine: ClusteringEngine,
    scorer: ConfidenceScorer,
}

impl UnifyService {
    #[must_use]
    pub fn new(config: &UnifyConfig) -> Self {
        Self {
            engine: ClusteringEngine::new(config.threshold),
            scorer: ConfidenceScorer::new(config.confidence_bonus),
        }
    }

    /// Validate every record, failing on the first malformed one.
    ///
    /// Nothing is clustered unless the whole batch is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidListing`] with the zero-based position of the
    /// offending record.
    pub fn validate(records: Vec<ListingRecord>) -> Result<Vec<RawListing>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                RawListing::try_from(record)
                    .map_err(|source| Error::InvalidListing { index, source })
            })
            .collect()
    }

    /// Cluster listings and score each cluster.
    #[must_use]
    pub fn unify(&self, listings: Vec<RawListing>) -> Vec<UnifiedItem> {
        self.engine
            .cluster(listings)
            .into_iter()
            .map(|cluster| {
                let confidence = self.scorer.score(&cluster);
                UnifiedItem::from_cluster(cluster, confidence)
            })
            .collect()
    }

    /// Run the full pipeline over raw records.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation.
    pub fn run(&self, records: Vec<ListingRecord>) -> Result<UnificationReport> {
        let received = records.len();
        let listings = Self::validate(records)?;
        debug!(listings = received, "Listings validated");

        let items = self.unify(listings);
        let arbitrage = analyze_all(&items);
        let summary = SummaryStats::from_items(&items, Utc::now());

        info!(
            listings = received,
            products = items.len(),
            arbitrage = arbitrage.len(),
            threshold = self.engine.threshold(),
            "Unified listings"
        );

        Ok(UnificationReport {
            items,
            arbitrage,
            summary,
        })
    }
}
