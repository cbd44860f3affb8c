//! Report exporter factory.

use crate::adapter::outbound::export::{CsvExporter, JsonExporter, XlsxExporter};
use crate::infrastructure::config::export::{ExportConfig, ExportFormat};
use crate::port::outbound::export::ReportExporter;

/// Build one exporter per configured format, in configuration order.
///
/// Duplicate formats are written once.
#[must_use]
pub fn build_exporters(config: &ExportConfig) -> Vec<Box<dyn ReportExporter>> {
    let mut formats: Vec<ExportFormat> = Vec::new();
    for format in &config.formats {
        if !formats.contains(format) {
            formats.push(*format);
        }
    }

    formats
        .into_iter()
        .map(|format| -> Box<dyn ReportExporter> {
            match format {
                ExportFormat::Csv => Box::new(CsvExporter::new(config.split_by_site)),
                ExportFormat::Json => Box::new(JsonExporter),
                ExportFormat::Xlsx => Box::new(XlsxExporter::new(config.split_by_site)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_configured_formats_once() {
        let config = ExportConfig {
            formats: vec![ExportFormat::Json, ExportFormat::Csv, ExportFormat::Json],
            ..ExportConfig::default()
        };
        let names: Vec<_> = build_exporters(&config).iter().map(|e| e.format()).collect();
        assert_eq!(names, vec!["json", "csv"]);
    }

    #[test]
    fn defaults_include_spreadsheet() {
        let names: Vec<_> = build_exporters(&ExportConfig::default())
            .iter()
            .map(|e| e.format())
            .collect();
        assert_eq!(names, vec!["csv", "json", "xlsx"]);
    }

    #[test]
    fn empty_formats_build_nothing() {
        let config = ExportConfig {
            formats: Vec::new(),
            ..ExportConfig::default()
        };
        assert!(build_exporters(&config).is_empty());
    }
}
