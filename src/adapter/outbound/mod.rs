//! Outbound adapters (driven side).

pub mod export;
pub mod source;
