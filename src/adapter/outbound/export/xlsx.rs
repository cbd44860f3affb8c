//! Spreadsheet report export.
//!
//! One workbook, `unified_products.xlsx`, with the sheets:
//! - `Unified Products` - one row per listing
//! - `Summary` - metric/value pairs
//! - `Arbitrage Opportunities` - only when at least one item spans two entries
//! - `<Site> Data` - per-venue slices of the products sheet (optional)

use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use super::sites_by_key;
use crate::domain::{SiteId, UnificationReport, UnifiedItem};
use crate::error::Result;
use crate::port::outbound::export::ReportExporter;

/// File name of the workbook.
pub const WORKBOOK_FILE: &str = "unified_products.xlsx";

const PRODUCTS_SHEET: &str = "Unified Products";
const SUMMARY_SHEET: &str = "Summary";
const ARBITRAGE_SHEET: &str = "Arbitrage Opportunities";

const PRODUCTS_HEADER: [&str; 7] = [
    "unified_id",
    "unified_name",
    "site",
    "site_product_name",
    "price",
    "url",
    "confidence",
];
const ARBITRAGE_HEADER: [&str; 7] = [
    "Product",
    "Sites",
    "Min Price",
    "Max Price",
    "Spread",
    "Profit %",
    "Confidence",
];

/// Excel caps sheet names at 31 characters.
const SHEET_NAME_MAX: usize = 31;
const SITE_SHEET_SUFFIX: &str = " Data";

type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Writes the report as a single XLSX workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter {
    split_by_site: bool,
}

impl XlsxExporter {
    #[must_use]
    pub const fn new(split_by_site: bool) -> Self {
        Self { split_by_site }
    }

    fn workbook(&self, report: &UnificationReport) -> XlsxResult<Workbook> {
        let bold = Format::new().set_bold();
        let mut workbook = Workbook::new();

        workbook.push_worksheet(products_sheet(PRODUCTS_SHEET, &report.items, None, &bold)?);
        workbook.push_worksheet(summary_sheet(report, &bold)?);
        if !report.arbitrage.is_empty() {
            workbook.push_worksheet(arbitrage_sheet(report, &bold)?);
        }

        if self.split_by_site {
            // Sheet names are case-insensitive in Excel.
            let groups =
                sites_by_key(&report.items, |site| site_sheet_name(site).to_lowercase());
            for (_, sites) in groups {
                let name = site_sheet_name(sites[0]);
                let sheet = products_sheet(&name, &report.items, Some(sites.as_slice()), &bold)?;
                workbook.push_worksheet(sheet);
            }
        }

        Ok(workbook)
    }
}

impl ReportExporter for XlsxExporter {
    fn format(&self) -> &'static str {
        "xlsx"
    }

    fn export(&self, report: &UnificationReport, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(WORKBOOK_FILE);
        self.workbook(report)?.save(&path)?;
        debug!(path = %path.display(), "Wrote XLSX workbook");
        Ok(vec![path])
    }
}

fn header_row(sheet: &mut Worksheet, header: &[&str], bold: &Format) -> XlsxResult<()> {
    for (col, title) in (0u16..).zip(header) {
        sheet.write_string_with_format(0, col, *title, bold)?;
    }
    Ok(())
}

fn products_sheet(
    name: &str,
    items: &[UnifiedItem],
    sites: Option<&[&SiteId]>,
    bold: &Format,
) -> XlsxResult<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;
    header_row(&mut sheet, &PRODUCTS_HEADER, bold)?;

    let entries = items.iter().flat_map(|item| {
        item.entries()
            .iter()
            .filter(move |entry| sites.map_or(true, |sites| sites.contains(&entry.site())))
            .map(move |entry| (item, entry))
    });
    for (row, (item, entry)) in (1u32..).zip(entries) {
        sheet.write_string(row, 0, item.id().as_str())?;
        sheet.write_string(row, 1, item.name())?;
        sheet.write_string(row, 2, entry.site().as_str())?;
        sheet.write_string(row, 3, entry.name())?;
        sheet.write_number(row, 4, decimal(entry.price()))?;
        sheet.write_string(row, 5, entry.url())?;
        sheet.write_number(row, 6, round3(item.confidence()))?;
    }

    Ok(sheet)
}

fn summary_sheet(report: &UnificationReport, bold: &Format) -> XlsxResult<Worksheet> {
    let summary = &report.summary;
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;
    header_row(&mut sheet, &["Metric", "Value"], bold)?;

    let counts = [
        ("Unique Products", summary.unique_products),
        ("Total Entries", summary.total_entries),
        ("Arbitrage Opportunities", summary.arbitrage_opportunities),
        ("Sites Covered", summary.sites_covered),
    ];
    for (row, (metric, value)) in (1u32..).zip(counts) {
        sheet.write_string(row, 0, metric)?;
        sheet.write_number(row, 1, value as f64)?;
    }
    sheet.write_string(5, 0, "Average Confidence")?;
    sheet.write_number(5, 1, round3(summary.average_confidence))?;
    sheet.write_string(6, 0, "Generated At")?;
    sheet.write_string(
        6,
        1,
        summary.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    )?;

    Ok(sheet)
}

fn arbitrage_sheet(report: &UnificationReport, bold: &Format) -> XlsxResult<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(ARBITRAGE_SHEET)?;
    header_row(&mut sheet, &ARBITRAGE_HEADER, bold)?;

    for (row, record) in (1u32..).zip(&report.arbitrage) {
        let sites = record
            .sites
            .iter()
            .map(SiteId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        sheet.write_string(row, 0, &record.product_name)?;
        sheet.write_string(row, 1, sites)?;
        sheet.write_number(row, 2, decimal(record.min_price))?;
        sheet.write_number(row, 3, decimal(record.max_price))?;
        sheet.write_number(row, 4, decimal(record.spread.round_dp(4)))?;
        sheet.write_number(row, 5, decimal(record.profit_pct.round_dp(2)))?;
        sheet.write_number(row, 6, round3(record.confidence))?;
    }

    Ok(sheet)
}

/// `<Site> Data`, with the venue name capitalized, stripped of characters
/// Excel rejects, and shortened to fit the sheet name limit.
fn site_sheet_name(site: &SiteId) -> String {
    let mut chars = site.as_str().chars();
    let capitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    let cleaned: String = capitalized
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .take(SHEET_NAME_MAX - SITE_SHEET_SUFFIX.len())
        .collect();
    format!("{}{SITE_SHEET_SUFFIX}", cleaned.trim_matches('\''))
}

fn decimal(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
