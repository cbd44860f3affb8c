//! Builders for domain primitives used across tests.
//!
//! Factory functions for [`ListingRecord`], [`RawListing`] and [`Cluster`]
//! so tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Cluster, ListingRecord, RawListing};

/// Price used when a test does not care about it.
pub const DEFAULT_PRICE: Decimal = dec!(0.5);

/// Create a well-formed [`ListingRecord`] with a generated URL.
pub fn record(site: &str, name: &str, price: Decimal) -> ListingRecord {
    ListingRecord::new(site, name, price, url_for(site, name))
}

/// Create a validated [`RawListing`] with a generated URL.
///
/// # Panics
///
/// Panics if the price is outside `[0, 1]`.
pub fn listing(site: &str, name: &str, price: Decimal) -> RawListing {
    RawListing::try_new(site, name, price, url_for(site, name))
        .expect("test listing should be valid")
}

/// Create a [`RawListing`] at [`DEFAULT_PRICE`].
pub fn named(site: &str, name: &str) -> RawListing {
    listing(site, name, DEFAULT_PRICE)
}

/// Build a cluster from `listings` in order, bypassing the engine.
///
/// # Panics
///
/// Panics if `listings` is empty.
pub fn cluster_of(listings: Vec<RawListing>) -> Cluster {
    let mut iter = listings.into_iter();
    let mut cluster = Cluster::singleton(iter.next().expect("cluster needs a member"));
    for listing in iter {
        cluster.push(listing);
    }
    cluster
}

/// The four-listing batch from the venue comparison walkthrough.
pub fn election_batch() -> Vec<ListingRecord> {
    vec![
        record(
            "polymarket",
            "Trump wins 2024 Presidential Election",
            dec!(0.52),
        ),
        record("kalshi", "Trump 2024 Election Victory", dec!(0.48)),
        record("polymarket", "Bitcoin reaches $100k", dec!(0.35)),
        record("kalshi", "Bitcoin $100k by end of year", dec!(0.38)),
    ]
}

fn url_for(site: &str, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("https://{site}.example/{slug}")
}
