//! CSV report export.
//!
//! Files written:
//! - `unified_products.csv` - one row per listing, tagged with its unified item
//! - `arbitrage_opportunities.csv` - one row per multi-entry item
//! - `summary.csv` - metric/value pairs
//! - `<site>_products.csv` - per-venue slices of the products file (optional);
//!   venues whose names reduce to the same file name share one file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::sites_by_key;
use crate::domain::{SiteId, UnificationReport, UnifiedItem};
use crate::error::Result;
use crate::port::outbound::export::ReportExporter;

const PRODUCTS_HEADER: &str =
    "unified_id,unified_name,site,site_product_name,price,url,confidence\n";
const ARBITRAGE_HEADER: &str = "product,sites,min_price,max_price,spread,profit_pct,confidence\n";

/// Writes the report as a set of CSV files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    split_by_site: bool,
}

impl CsvExporter {
    #[must_use]
    pub const fn new(split_by_site: bool) -> Self {
        Self { split_by_site }
    }

    /// Products table, optionally restricted to a set of venues.
    #[must_use]
    pub fn products_csv(items: &[UnifiedItem], sites: Option<&[&SiteId]>) -> String {
        let mut csv = String::from(PRODUCTS_HEADER);

        for item in items {
            for entry in item.entries() {
                if sites.is_some_and(|sites| !sites.contains(&entry.site())) {
                    continue;
                }
                csv.push_str(&format!(
                    "{},{},{},{},{},{},{:.3}\n",
                    item.id(),
                    escape(item.name()),
                    escape(entry.site().as_str()),
                    escape(entry.name()),
                    entry.price(),
                    escape(entry.url()),
                    item.confidence()
                ));
            }
        }

        csv
    }

    #[must_use]
    pub fn arbitrage_csv(report: &UnificationReport) -> String {
        let mut csv = String::from(ARBITRAGE_HEADER);

        for record in &report.arbitrage {
            let sites = record
                .sites
                .iter()
                .map(SiteId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            csv.push_str(&format!(
                "{},{},{},{},{},{},{:.3}\n",
                escape(&record.product_name),
                escape(&sites),
                record.min_price,
                record.max_price,
                record.spread.round_dp(4),
                record.profit_pct.round_dp(2),
                record.confidence
            ));
        }

        csv
    }

    #[must_use]
    pub fn summary_csv(report: &UnificationReport) -> String {
        let summary = &report.summary;
        format!(
            "metric,value\n\
             unique_products,{}\n\
             total_entries,{}\n\
             average_confidence,{:.3}\n\
             arbitrage_opportunities,{}\n\
             sites_covered,{}\n\
             generated_at,{}\n",
            summary.unique_products,
            summary.total_entries,
            summary.average_confidence,
            summary.arbitrage_opportunities,
            summary.sites_covered,
            summary.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl ReportExporter for CsvExporter {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn export(&self, report: &UnificationReport, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        let mut write = |name: String, contents: String| -> Result<()> {
            let path = dir.join(name);
            fs::write(&path, contents)?;
            debug!(path = %path.display(), "Wrote CSV file");
            written.push(path);
            Ok(())
        };

        write(
            "unified_products.csv".into(),
            Self::products_csv(&report.items, None),
        )?;
        write(
            "arbitrage_opportunities.csv".into(),
            Self::arbitrage_csv(report),
        )?;
        write("summary.csv".into(), Self::summary_csv(report))?;

        if self.split_by_site {
            let mut groups = sites_by_key(&report.items, |site| file_stem(site.as_str()));
            groups.sort_by(|a, b| a.0.cmp(&b.0));
            for (stem, sites) in groups {
                write(
                    format!("{stem}_products.csv"),
                    Self::products_csv(&report.items, Some(sites.as_slice())),
                )?;
            }
        }

        Ok(written)
    }
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Reduce a venue name to characters safe in a file name.
fn file_stem(site: &str) -> String {
    site.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
