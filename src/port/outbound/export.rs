//! Report export port.

use std::path::{Path, PathBuf};

use crate::domain::UnificationReport;
use crate::error::Result;

/// Writes a unification report to a directory in some file format.
pub trait ReportExporter: Send + Sync {
    /// Format name (e.g. `csv`).
    fn format(&self) -> &'static str;

    /// Write `report` under `dir`, returning the paths of the files created.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    fn export(&self, report: &UnificationReport, dir: &Path) -> Result<Vec<PathBuf>>;
}
