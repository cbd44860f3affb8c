//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured adapters
//! from application configuration.
//!
//! # Submodules
//!
//! - [`export`] - Report exporter construction
//! - [`source`] - Listing source construction

pub mod export;
pub mod source;
