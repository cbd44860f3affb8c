//! Price spread analysis for unified items.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{ArbitrageRecord, RawListing, UnifiedItem};

/// Derive the cross-venue spread for `item`.
///
/// Returns `None` for items with fewer than two entries. A minimum price of
/// zero yields a profit percentage of zero rather than a division error.
#[must_use]
pub fn analyze(item: &UnifiedItem) -> Option<ArbitrageRecord> {
    if !item.is_multi_entry() {
        return None;
    }

    let prices = || item.entries().iter().map(RawListing::price);
    let min_price = prices().min()?;
    let max_price = prices().max()?;
    let spread = max_price - min_price;

    let profit_pct = if min_price.is_zero() {
        Decimal::ZERO
    } else {
        // Saturates instead of overflowing for pathologically small prices.
        (spread * dec!(100))
            .checked_div(min_price)
            .unwrap_or(Decimal::MAX)
    };

    Some(ArbitrageRecord {
        product_name: item.name().to_string(),
        sites: item.sites().to_vec(),
        min_price,
        max_price,
        spread,
        profit_pct,
        confidence: item.confidence(),
    })
}

/// Analyze every item, keeping only those that produce a record.
#[must_use]
pub fn analyze_all(items: &[UnifiedItem]) -> Vec<ArbitrageRecord> {
    items.iter().filter_map(analyze).collect()
}
