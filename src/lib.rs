//! Edgematch - cross-venue prediction market unification and arbitrage.
//!
//! Listings for the same real-world event appear on several venues under
//! slightly different titles. This crate links them into unified products by
//! token-set similarity, scores each link, and reports the price spread
//! between venues.
//!
//! # Architecture
//!
//! - [`domain`] - Listings, clusters, unified items and the similarity measure
//! - [`application`] - Clustering engine, confidence scorer, arbitrage analysis
//! - [`port`] - Traits for listing sources and report exporters
//! - [`adapter`] - Sample, file and HTTP sources; CSV and JSON exporters; the CLI
//! - [`infrastructure`] - Configuration, logging, factories and the run pipeline
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use edgematch::application::unify::{UnifyConfig, UnifyService};
//! use edgematch::domain::ListingRecord;
//! use rust_decimal_macros::dec;
//!
//! let report = UnifyService::new(&UnifyConfig::default())
//!     .run(vec![
//!         ListingRecord::new("polymarket", "Fed cuts rates", dec!(0.40), "https://a.example"),
//!         ListingRecord::new("kalshi", "Fed cuts rates", dec!(0.44), "https://b.example"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.items.len(), 1);
//! assert_eq!(report.arbitrage[0].profit_pct, dec!(10));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
