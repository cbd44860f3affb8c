//! Exchange-agnostic domain types and the lexical similarity measure.

pub mod arbitrage;
pub mod cluster;
pub mod error;
pub mod id;
pub mod listing;
pub mod money;
pub mod report;
pub mod similarity;
pub mod stats;
pub mod unified;

pub use arbitrage::ArbitrageRecord;
pub use cluster::Cluster;
pub use id::{SiteId, UnifiedId};
pub use listing::{ListingRecord, RawListing};
pub use money::Price;
pub use report::UnificationReport;
pub use similarity::similarity;
pub use stats::SummaryStats;
pub use unified::UnifiedItem;
