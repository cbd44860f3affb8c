//! Venue listings.
//!
//! - [`ListingRecord`] - Unvalidated listing as produced by a data source
//! - [`RawListing`] - Validated, immutable venue-product observation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::SiteId;
use super::money::Price;

/// A listing exactly as a data source delivered it.
///
/// Every field is optional so that malformed input deserializes and can be
/// reported with a precise [`DomainError`] instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ListingRecord {
    /// Create a fully-populated record.
    pub fn new(
        site: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        url: impl Into<String>,
    ) -> Self {
        Self {
            site: Some(site.into()),
            name: Some(name.into()),
            price: Some(price),
            url: Some(url.into()),
        }
    }
}

/// One venue's observation of a tradable prediction-market product.
///
/// Immutable once constructed. The price is the venue's implied probability
/// and always lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawListing {
    site: SiteId,
    name: String,
    price: Price,
    url: String,
}

impl RawListing {
    /// Create a new listing with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `site`, `name` and `url` must not be blank
    /// - `price` must be within `[0, 1]` (out-of-range prices are rejected,
    ///   never clamped)
    /// - `url` must be an absolute URL
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        site: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let site = require("site", site.into())?;
        let name = require("name", name.into())?;
        let url = require("url", url.into())?;

        if price < Decimal::ZERO || price > Decimal::ONE {
            return Err(DomainError::PriceOutOfRange { price });
        }

        if let Err(e) = url::Url::parse(&url) {
            return Err(DomainError::InvalidUrl {
                url,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            site: SiteId::new(site),
            name,
            price,
            url,
        })
    }

    /// Get the venue this listing was observed on.
    #[must_use]
    pub const fn site(&self) -> &SiteId {
        &self.site
    }

    /// Get the venue's product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the listed price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Get the product URL on the venue.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TryFrom<ListingRecord> for RawListing {
    type Error = DomainError;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        let site = record
            .site
            .ok_or(DomainError::MissingField { field: "site" })?;
        let name = record
            .name
            .ok_or(DomainError::MissingField { field: "name" })?;
        let price = record
            .price
            .ok_or(DomainError::MissingField { field: "price" })?;
        let url = record.url.ok_or(DomainError::MissingField { field: "url" })?;

        Self::try_new(site, name, price, url)
    }
}

fn require(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(value)
}
