//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with the systems
//! around the unification core.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌───────────┐
//! │ Listing │                                          │  Report   │
//! │ Source  │                                          │ Exporter  │
//! └─────────┘                                          └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::source::ListingSource`] - Listing acquisition (sample data, files, HTTP)
//! - [`outbound::export::ReportExporter`] - Report export (CSV, JSON)

pub mod outbound;
