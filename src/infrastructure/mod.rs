//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, adapter wiring and the end-to-end runner.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions
//! - [`runner`] - Acquire, unify and export in one call

pub mod config;
pub mod factory;
pub mod runner;
