//! JSON file listing source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ListingRecord;
use crate::error::Result;
use crate::port::outbound::source::ListingSource;

/// Reads a JSON array of listings from disk.
///
/// Each element is an object with `site`, `name`, `price` and `url` keys.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<ListingRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<ListingRecord> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "Read listings file");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[tokio::test]
    async fn reads_listing_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"site": "kalshi", "name": "Ukraine war ends in 2024", "price": 0.31, "url": "https://kalshi.com/war-end"}}]"#
        )
        .unwrap();

        let records = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, Some(dec!(0.31)));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/edgematch/listings.json");
        assert!(matches!(source.fetch().await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn malformed_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = FileSource::new(file.path()).fetch().await;
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
