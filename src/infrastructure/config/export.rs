//! Report export configuration.

use serde::Deserialize;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

/// Configuration for report export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output directory. Defaults to `outputs`.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Formats to write. Defaults to CSV, JSON and XLSX; empty disables export.
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    /// Also write one products file (CSV) and sheet (XLSX) per venue. Defaults to true.
    #[serde(default = "default_split_by_site")]
    pub split_by_site: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            formats: default_formats(),
            split_by_site: default_split_by_site(),
        }
    }
}

fn default_dir() -> String {
    "outputs".to_string()
}

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Csv, ExportFormat::Json, ExportFormat::Xlsx]
}

const fn default_split_by_site() -> bool {
    true
}
