//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration parse failures are rendered with the offending TOML
//! snippet; every other error becomes a plain report with an optional hint.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(edgematch::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Listing rejected during validation.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(edgematch::listing),
    help("every listing needs site, name, price in [0, 1] and a valid url")
)]
pub struct ListingDiagnostic {
    pub message: String,
}

/// Convert an application error into a renderable report.
///
/// `config_src` is the configuration text, when one was read, so TOML
/// parse errors can point at the offending span.
pub fn report(error: Error, config_src: Option<&str>) -> miette::Report {
    match (&error, config_src) {
        (Error::Config(ConfigError::Parse(parse)), Some(src)) => {
            let (offset, len) = parse
                .span()
                .map_or((0, 0), |span| (span.start, span.end - span.start));
            ConfigDiagnostic::new(parse.message(), src, offset, len)
                .with_help("check the TOML syntax near the highlighted location")
                .into()
        }
        (Error::InvalidListing { .. }, _) => ListingDiagnostic {
            message: error.to_string(),
        }
        .into(),
        _ => miette::Report::msg(error.to_string()),
    }
}
