//! Infrastructure configuration modules.

pub mod export;
pub mod logging;
pub mod settings;
pub mod source;
pub mod unify;
