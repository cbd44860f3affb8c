//! Cross-venue price discrepancy for one unified item.

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::SiteId;
use super::money::Price;

/// Derived price spread for a unified item with at least two entries.
///
/// Not persisted; recomputed from the unified item on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageRecord {
    pub product_name: String,
    pub sites: Vec<SiteId>,
    pub min_price: Price,
    pub max_price: Price,
    /// `max_price - min_price`, never negative.
    pub spread: Price,
    /// `spread / min_price * 100`, or zero when `min_price` is zero.
    pub profit_pct: Decimal,
    pub confidence: f64,
}
