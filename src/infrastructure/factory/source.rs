//! Listing source factory.

use tracing::info;

use crate::adapter::outbound::source::{FileSource, HttpSource, SampleSource};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceKind;
use crate::port::outbound::source::ListingSource;

/// Build the listing source selected by `config.source.kind`.
///
/// # Errors
///
/// Returns an error if the selected source is missing its path or URL.
pub fn build_source(config: &Config) -> Result<Box<dyn ListingSource>> {
    let source: Box<dyn ListingSource> = match config.source.kind {
        SourceKind::Sample => Box::new(SampleSource::new()),
        SourceKind::File => {
            let path = config
                .source
                .path
                .as_deref()
                .ok_or(ConfigError::MissingField {
                    field: "source.path",
                })?;
            Box::new(FileSource::new(path))
        }
        SourceKind::Http => Box::new(HttpSource::from_config(&config.source)?),
    };

    info!(source = source.name(), "Listing source configured");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_sample_source() {
        let source = build_source(&Config::default()).unwrap();
        assert_eq!(source.name(), "sample");
    }

    #[test]
    fn file_source_without_path_fails() {
        let mut config = Config::default();
        config.source.kind = SourceKind::File;
        assert!(build_source(&config).is_err());
    }

    #[test]
    fn file_source_uses_configured_path() {
        let mut config = Config::default();
        config.source.kind = SourceKind::File;
        config.source.path = Some("listings.json".into());
        assert_eq!(build_source(&config).unwrap().name(), "file");
    }
}
