//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use edgematch::domain::error::DomainError;
//! use edgematch::domain::RawListing;
//! use rust_decimal_macros::dec;
//!
//! // Prices are probabilities and must stay within [0, 1]
//! let result = RawListing::try_new(
//!     "kalshi",
//!     "Ukraine war ends in 2024",
//!     dec!(1.31),
//!     "https://kalshi.com/war-end",
//! );
//!
//! assert!(matches!(result, Err(DomainError::PriceOutOfRange { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required listing field was absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Listing prices are probabilities and must lie in `[0, 1]`.
    #[error("price must be between 0 and 1, got {price}")]
    PriceOutOfRange {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Listing URL could not be parsed.
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied.
        url: String,
        /// Parser failure description.
        reason: String,
    },
}
