use std::fs;
use std::path::{Path, PathBuf};

use edgematch::domain::ListingRecord;

/// Write `records` as a JSON array to `<dir>/listings.json`.
pub fn write_listings(dir: &Path, records: &[ListingRecord]) -> PathBuf {
    let path = dir.join("listings.json");
    let body = serde_json::to_string_pretty(records).expect("serialize listings");
    fs::write(&path, body).expect("write listings");
    path
}

/// Write a config file to `<dir>/config.toml`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}
