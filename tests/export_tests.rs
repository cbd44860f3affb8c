//! Report export tests against a temporary directory.

mod support;

use std::fs;

use calamine::{open_workbook, Reader, Xlsx};
use edgematch::adapter::outbound::export::{CsvExporter, JsonExporter, XlsxExporter};
use edgematch::application::unify::{UnifyConfig, UnifyService};
use edgematch::domain::{ListingRecord, UnificationReport};
use edgematch::infrastructure::config::export::ExportFormat;
use edgematch::infrastructure::config::settings::Config;
use edgematch::infrastructure::runner::export_report;
use edgematch::port::outbound::export::ReportExporter;
use edgematch::testkit::domain::{election_batch, record};
use rust_decimal_macros::dec;

fn report() -> UnificationReport {
    UnifyService::new(&UnifyConfig::default())
        .run(election_batch())
        .unwrap()
}

/// Two venues that differ only in case, never clustered together.
fn mixed_case_report() -> UnificationReport {
    let batch: Vec<ListingRecord> = vec![
        record("Kalshi", "Fed cuts rates", dec!(0.4)),
        record("kalshi", "Bitcoin above 100k", dec!(0.2)),
    ];
    UnifyService::new(&UnifyConfig::default()).run(batch).unwrap()
}

#[test]
fn csv_exporter_writes_core_and_per_site_files() {
    let dir = tempfile::tempdir().unwrap();
    let written = CsvExporter::new(true)
        .export(&report(), dir.path())
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "unified_products.csv",
            "arbitrage_opportunities.csv",
            "summary.csv",
            "kalshi_products.csv",
            "polymarket_products.csv",
        ]
    );

    let products = fs::read_to_string(dir.path().join("unified_products.csv")).unwrap();
    // Header plus one row per listing.
    assert_eq!(products.lines().count(), 5);

    let kalshi = fs::read_to_string(dir.path().join("kalshi_products.csv")).unwrap();
    assert_eq!(kalshi.lines().count(), 3);
    assert!(kalshi.lines().skip(1).all(|line| line.contains(",kalshi,")));
}

#[test]
fn csv_exporter_can_skip_per_site_files() {
    let dir = tempfile::tempdir().unwrap();
    let written = CsvExporter::new(false)
        .export(&report(), dir.path())
        .unwrap();

    assert_eq!(written.len(), 3);
    assert!(!dir.path().join("kalshi_products.csv").exists());
}

#[test]
fn arbitrage_csv_has_one_row_per_opportunity() {
    let dir = tempfile::tempdir().unwrap();
    CsvExporter::new(false)
        .export(&report(), dir.path())
        .unwrap();

    let arbitrage = fs::read_to_string(dir.path().join("arbitrage_opportunities.csv")).unwrap();
    let rows: Vec<&str> = arbitrage.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("Trump 2024 Election Victory,\"polymarket, kalshi\",0.48,0.52,"));
    assert!(rows[1].contains(",8.33,"));
}

#[test]
fn json_export_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let written = JsonExporter.export(&report(), dir.path()).unwrap();
    assert_eq!(written.len(), 1);

    let body = fs::read_to_string(&written[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["items"].as_array().unwrap().len(), 3);
    assert_eq!(value["arbitrage"].as_array().unwrap().len(), 1);
    assert_eq!(value["summary"]["unique_products"], 3);
    assert_eq!(value["summary"]["total_entries"], 4);
}

#[test]
fn runner_uses_configured_formats_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.export.formats = vec![ExportFormat::Json];

    let written = export_report(&report(), &config, dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("unified_products.json")]);
    assert!(!dir.path().join("summary.csv").exists());
}

#[test]
fn exporter_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports").join("today");

    JsonExporter.export(&report(), &nested).unwrap();
    assert!(nested.join("unified_products.json").exists());
}

#[test]
fn csv_merges_venues_that_share_a_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let report = mixed_case_report();

    let written = CsvExporter::new(true).export(&report, dir.path()).unwrap();
    let per_site: Vec<_> = written
        .iter()
        .filter(|p| p.ends_with("kalshi_products.csv"))
        .collect();
    assert_eq!(per_site.len(), 1);

    let kalshi = fs::read_to_string(dir.path().join("kalshi_products.csv")).unwrap();
    assert_eq!(kalshi.lines().count(), 3);
    assert!(kalshi.contains("Fed cuts rates"));
    assert!(kalshi.contains("Bitcoin above 100k"));
}

#[test]
fn xlsx_workbook_has_report_and_venue_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let written = XlsxExporter::new(true).export(&report(), dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("unified_products.xlsx")]);

    let mut workbook: Xlsx<_> = open_workbook(&written[0]).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            "Unified Products",
            "Summary",
            "Arbitrage Opportunities",
            "Polymarket Data",
            "Kalshi Data",
        ]
    );

    // Header plus one row per listing.
    let products = workbook.worksheet_range("Unified Products").unwrap();
    assert_eq!(products.height(), 5);
    let kalshi = workbook.worksheet_range("Kalshi Data").unwrap();
    assert_eq!(kalshi.height(), 3);
    let arbitrage = workbook.worksheet_range("Arbitrage Opportunities").unwrap();
    assert_eq!(arbitrage.height(), 2);
}

#[test]
fn xlsx_skips_empty_arbitrage_and_venue_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let report = mixed_case_report();

    let written = XlsxExporter::new(false).export(&report, dir.path()).unwrap();
    let workbook: Xlsx<_> = open_workbook(&written[0]).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Unified Products", "Summary"]);
}

#[test]
fn xlsx_merges_venues_that_share_a_sheet_name() {
    let dir = tempfile::tempdir().unwrap();
    let report = mixed_case_report();

    let written = XlsxExporter::new(true).export(&report, dir.path()).unwrap();
    let mut workbook: Xlsx<_> = open_workbook(&written[0]).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Unified Products", "Summary", "Kalshi Data"]
    );
    assert_eq!(workbook.worksheet_range("Kalshi Data").unwrap().height(), 3);
}
