//! Monetary types for price representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
///
/// Prediction market prices are implied probabilities in `[0, 1]`.
pub type Price = Decimal;
