//! Report export adapters.

mod csv;
mod json;
mod xlsx;

pub use csv::CsvExporter;
pub use json::JsonExporter;
pub use xlsx::XlsxExporter;

use crate::domain::{SiteId, UnifiedItem};

/// Venues of `items` grouped by the output name `key` gives them, in
/// first-seen order.
///
/// Distinct venues whose names collapse to the same key (e.g. `Kalshi` and
/// `kalshi` as file names) share one group so their rows land in one output.
fn sites_by_key<'a>(
    items: &'a [UnifiedItem],
    key: impl Fn(&SiteId) -> String,
) -> Vec<(String, Vec<&'a SiteId>)> {
    let mut groups: Vec<(String, Vec<&SiteId>)> = Vec::new();
    for site in items.iter().flat_map(UnifiedItem::sites) {
        let name = key(site);
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, sites)) => {
                if !sites.contains(&site) {
                    sites.push(site);
                }
            }
            None => groups.push((name, vec![site])),
        }
    }
    groups
}
