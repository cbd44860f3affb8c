//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving adapters (the CLI)
//! - [`outbound`] - Driven adapters (listing sources, report exporters)

pub mod inbound;
pub mod outbound;
