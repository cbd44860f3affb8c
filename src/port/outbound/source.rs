//! Listing acquisition port.
//!
//! Sources deliver unvalidated [`ListingRecord`]s; validation happens in the
//! unification service so every source is held to the same rules. Any
//! retry or timeout policy belongs to the source implementation.

use async_trait::async_trait;

use crate::domain::ListingRecord;
use crate::error::Result;

/// Supplies one batch of venue listings.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Fetch the current batch of listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read or decoded.
    async fn fetch(&self) -> Result<Vec<ListingRecord>>;
}
