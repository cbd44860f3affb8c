//! Built-in sample data set.
//!
//! Fifteen listings from three venues, used when no live source is
//! configured and by the CLI smoke tests.

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::domain::{ListingRecord, Price};
use crate::error::Result;
use crate::port::outbound::source::ListingSource;

const POLYMARKET: &[(&str, Price, &str)] = &[
    ("Trump wins 2024 Presidential Election", dec!(0.47), "https://polymarket.com/trump-2024"),
    ("Bitcoin reaches $100,000 in 2024", dec!(0.23), "https://polymarket.com/bitcoin-100k"),
    ("Federal Reserve cuts rates below 3%", dec!(0.67), "https://polymarket.com/fed-rates"),
    ("AI achieves AGI by 2025", dec!(0.15), "https://polymarket.com/agi-2025"),
    ("Ethereum reaches $5000 in 2024", dec!(0.34), "https://polymarket.com/eth-5k"),
];

const KALSHI: &[(&str, Price, &str)] = &[
    ("Trump 2024 Election Victory", dec!(0.52), "https://kalshi.com/event/PRES24"),
    ("AI achieves AGI by 2025", dec!(0.12), "https://kalshi.com/agi-market"),
    ("Fed rate below 3% in 2024", dec!(0.71), "https://kalshi.com/fed-low"),
    ("Ukraine war ends in 2024", dec!(0.31), "https://kalshi.com/war-end"),
    ("Ethereum above $5000 by 2024", dec!(0.38), "https://kalshi.com/eth-high"),
];

const PREDICTION_MARKET: &[(&str, Price, &str)] = &[
    ("Donald Trump Presidential Win 2024", dec!(0.49), "https://prediction-market.com/us-election"),
    ("Bitcoin $100k Target 2024", dec!(0.28), "https://prediction-market.com/crypto-btc"),
    ("AGI achieved by 2025", dec!(0.18), "https://prediction-market.com/ai-agi"),
    ("Federal Reserve cuts to 3%", dec!(0.73), "https://prediction-market.com/fed-cut"),
    ("Ethereum $5000 Price Target 2024", dec!(0.41), "https://prediction-market.com/eth-target"),
];

/// Static listings from polymarket, kalshi and prediction-market.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The sample records in venue order.
    #[must_use]
    pub fn records() -> Vec<ListingRecord> {
        [
            ("polymarket", POLYMARKET),
            ("kalshi", KALSHI),
            ("prediction-market", PREDICTION_MARKET),
        ]
        .into_iter()
        .flat_map(|(site, rows)| {
            rows.iter()
                .map(move |(name, price, url)| ListingRecord::new(site, *name, *price, *url))
        })
        .collect()
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn fetch(&self) -> Result<Vec<ListingRecord>> {
        let records = Self::records();
        debug!(count = records.len(), "Loaded sample listings");
        Ok(records)
    }
}
