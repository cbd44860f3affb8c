//! Path utilities for edgematch.
//!
//! Configuration lives under `~/.edgematch/`:
//! - `~/.edgematch/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the edgematch home directory (`~/.edgematch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".edgematch")
}

/// Returns the default config file path (`~/.edgematch/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
