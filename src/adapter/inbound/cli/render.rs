//! Terminal rendering of a unification report.

use std::path::PathBuf;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::unify::analyze;
use crate::domain::{SiteId, UnificationReport, UnifiedItem};

/// Product names longer than this are truncated in the table.
const NAME_WIDTH: usize = 50;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Product Name")]
    name: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Sites Count")]
    sites_count: usize,
}

/// Print the report and the files written for it to stdout.
///
/// JSON mode emits everything as a single document.
pub fn report(report: &UnificationReport, exported: &[PathBuf]) {
    if output::is_json() {
        output::json_output(json!({
            "command": "run",
            "report": report,
            "exported": exported,
        }));
        return;
    }
    if output::is_quiet() {
        return;
    }

    output::section("Unified Products");
    if report.items.is_empty() {
        output::note("No listings to unify");
    } else {
        output::lines(&Table::new(product_rows(&report.items)).to_string());
    }

    arbitrage(&report.items);
    summary(report);

    if !exported.is_empty() {
        output::section("Exported");
        for path in exported {
            output::note(&path.display().to_string());
        }
    }
}

fn product_rows(items: &[UnifiedItem]) -> Vec<ProductRow> {
    items
        .iter()
        .flat_map(|item| {
            item.entries().iter().map(move |entry| ProductRow {
                id: item.id().short().to_string(),
                name: truncate(entry.name(), NAME_WIDTH),
                site: capitalize(entry.site()),
                price: format!("{:.3}", entry.price()),
                confidence: format!("{:.3}", item.confidence()),
                sites_count: item.sites().len(),
            })
        })
        .collect()
}

fn arbitrage(items: &[UnifiedItem]) {
    output::section("Arbitrage Opportunities");

    let mut found = false;
    for item in items {
        let Some(record) = analyze(item) else {
            continue;
        };
        found = true;

        output::field("Product", output::highlight(&record.product_name));
        for entry in item.entries() {
            output::field(
                &format!("  {}", capitalize(entry.site())),
                format!("{:.3}", entry.price()),
            );
        }
        output::field(
            "Spread",
            format!(
                "{:.3} | Profit {}",
                record.spread,
                output::positive(format!("{:.1}%", record.profit_pct))
            ),
        );
        output::field("Confidence", format!("{:.3}", record.confidence));
    }

    if !found {
        output::note("No arbitrage opportunities found (need products on multiple sites)");
    }
}

fn summary(report: &UnificationReport) {
    let stats = &report.summary;
    output::section("Quick Statistics");
    output::field("Unique products", stats.unique_products);
    output::field("Total entries", stats.total_entries);
    output::field("Sites covered", stats.sites_covered);
    output::field("Arbitrage opportunities", stats.arbitrage_opportunities);
    output::field(
        "Average confidence",
        format!("{:.3}", stats.average_confidence),
    );
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let head: String = name.chars().take(width).collect();
    format!("{head}...")
}

fn capitalize(site: &SiteId) -> String {
    let mut chars = site.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
