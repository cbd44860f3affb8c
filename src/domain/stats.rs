//! Batch-level summary statistics.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::unified::UnifiedItem;

/// Aggregate figures for one unification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub unique_products: usize,
    pub total_entries: usize,
    pub average_confidence: f64,
    pub arbitrage_opportunities: usize,
    pub sites_covered: usize,
    pub generated_at: DateTime<Utc>,
}

impl SummaryStats {
    /// Summarize `items`, stamping the result with `generated_at`.
    #[must_use]
    pub fn from_items(items: &[UnifiedItem], generated_at: DateTime<Utc>) -> Self {
        let total_entries = items.iter().map(|item| item.entries().len()).sum();
        let average_confidence = if items.is_empty() {
            0.0
        } else {
            items.iter().map(UnifiedItem::confidence).sum::<f64>() / items.len() as f64
        };
        let arbitrage_opportunities = items.iter().filter(|i| i.is_multi_entry()).count();
        let sites_covered = items
            .iter()
            .flat_map(UnifiedItem::sites)
            .collect::<HashSet<_>>()
            .len();

        Self {
            unique_products: items.len(),
            total_entries,
            average_confidence,
            arbitrage_opportunities,
            sites_covered,
            generated_at,
        }
    }
}
