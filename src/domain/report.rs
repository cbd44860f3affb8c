//! Output of one unification run.

use serde::Serialize;

use super::arbitrage::ArbitrageRecord;
use super::stats::SummaryStats;
use super::unified::UnifiedItem;

/// Everything a reporting collaborator needs from one run.
///
/// Items keep cluster creation order; arbitrage records follow the order of
/// the items they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct UnificationReport {
    pub items: Vec<UnifiedItem>,
    pub arbitrage: Vec<ArbitrageRecord>,
    pub summary: SummaryStats,
}
