//! JSON report export.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::UnificationReport;
use crate::error::Result;
use crate::port::outbound::export::ReportExporter;

/// File name of the JSON report.
pub const REPORT_FILE: &str = "unified_products.json";

/// Writes the whole report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn export(&self, report: &UnificationReport, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let path = dir.join(REPORT_FILE);
        fs::write(&path, serde_json::to_string_pretty(report)?)?;
        debug!(path = %path.display(), "Wrote JSON report");
        Ok(vec![path])
    }
}
