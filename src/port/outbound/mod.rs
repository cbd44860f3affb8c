//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators at the edges of a run: where
//! listings come from and where reports go.

pub mod export;
pub mod source;
