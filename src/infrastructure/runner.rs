//! End-to-end run: acquire, unify, export.

use std::path::{Path, PathBuf};

use tracing::info;

use super::config::settings::Config;
use super::factory::export::build_exporters;
use crate::application::unify::UnifyService;
use crate::domain::UnificationReport;
use crate::error::Result;
use crate::port::outbound::source::ListingSource;

/// Fetch one batch from `source` and unify it.
///
/// # Errors
///
/// Returns an error if the source fails or any listing is malformed.
pub async fn unify_from_source(
    source: &dyn ListingSource,
    config: &Config,
) -> Result<UnificationReport> {
    let records = source.fetch().await?;
    info!(source = source.name(), count = records.len(), "Listings acquired");

    UnifyService::new(&config.unify.to_core_config()).run(records)
}

/// Write `report` with every configured exporter.
///
/// # Errors
///
/// Returns an error on the first exporter that fails.
pub fn export_report(
    report: &UnificationReport,
    config: &Config,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for exporter in build_exporters(&config.export) {
        let paths = exporter.export(report, dir)?;
        info!(
            format = exporter.format(),
            files = paths.len(),
            dir = %dir.display(),
            "Report exported"
        );
        written.extend(paths);
    }
    Ok(written)
}
