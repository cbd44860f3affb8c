//! Listing source configuration.

use serde::Deserialize;

/// Which listing source to read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in sample data set.
    #[default]
    Sample,
    /// JSON file on disk.
    File,
    /// JSON over HTTP.
    Http,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sample => "sample",
            Self::File => "file",
            Self::Http => "http",
        };
        f.write_str(name)
    }
}

/// Configuration for listing acquisition.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Source type. Defaults to the built-in sample.
    #[serde(default)]
    pub kind: SourceKind,

    /// Path of the listings file (`kind = "file"`).
    #[serde(default)]
    pub path: Option<String>,

    /// Endpoint returning listings (`kind = "http"`).
    #[serde(default)]
    pub url: Option<String>,

    /// Request timeout in seconds for the HTTP source. Defaults to 10.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per fetch, including the first. Defaults to 1.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    /// Delay between attempts in milliseconds. Defaults to 0.
    #[serde(default)]
    pub retry_backoff_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: None,
            url: None,
            timeout_secs: default_timeout_secs(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: 0,
        }
    }
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_retry_max_attempts() -> u32 {
    1
}
