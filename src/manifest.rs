//! Manifest construction and writing.
//!
//! Turns a [`ScanResult`] into the JSON document the rendering client reads:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "updated_at": "2024-05-01T08:30:00Z",
//!   "version": "20240501083000",
//!   "default_year": "2024",
//!   "years": ["Total", "2024", "2023"],
//!   "files": {"Total": "github.svg", "2024": "github_2024.svg", "2023": "github_2023.svg"},
//!   "urls": {"Total": "https://example.com/assets/github.svg", ...}
//! }
//! ```
//!
//! `files` and `urls` keep the order of `years`, so [`TokenMap`] is an ordered
//! list of pairs rather than a hash map. The whole document is rebuilt and
//! overwritten on every run.
//!
//! Building is pure: the current year comes in as an argument, so the
//! default-year rule is testable without touching the clock.

use crate::config::{ConfigError, ManifestConfig};
use crate::scan::{self, ScanError, ScanResult};
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, Serializer};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Version of the manifest document format.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered token → value mapping, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMap(Vec<(String, String)>);

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Replacing keeps the original position.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.0.iter_mut().find(|(t, _)| *t == token) {
            Some(slot) => slot.1 = value,
            None => self.0.push((token, value)),
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// The manifest document. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Manifest {
    pub schema_version: u32,
    /// ISO-8601 UTC, second precision, `Z` suffix.
    pub updated_at: String,
    /// `YYYYMMDDHHMMSS` of the same instant, for cache busting.
    pub version: String,
    pub default_year: String,
    /// Aggregate token first, then years newest-first.
    pub years: Vec<String>,
    pub files: TokenMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<TokenMap>,
}

/// Build the manifest for a scan.
pub fn build_manifest(scan: &ScanResult, config: &ManifestConfig, current_year: i32) -> Manifest {
    // Year keys are four ASCII digits, so reversed lexical order is
    // descending numeric order.
    let discovered: Vec<&String> = scan.years.keys().rev().collect();

    let mut years = Vec::with_capacity(discovered.len() + 1);
    years.push(config.total_label.clone());
    years.extend(discovered.iter().map(|y| y.to_string()));

    let mut files = TokenMap::new();
    files.insert(config.total_label.as_str(), scan.aggregate_file.as_str());
    for year in &discovered {
        files.insert(year.as_str(), scan.years[*year].as_str());
    }

    let updated: DateTime<Utc> = scan.latest_modified.into();

    Manifest {
        schema_version: SCHEMA_VERSION,
        updated_at: format_updated_at(&updated),
        version: format_version(&updated),
        default_year: pick_default_year(&years[1..], current_year, &config.total_label),
        urls: build_urls(&config.base_url, &files),
        years,
        files,
    }
}

/// Current year if discovered, else the newest year, else the aggregate token.
///
/// `years_desc` must be sorted newest-first.
pub fn pick_default_year(years_desc: &[String], current_year: i32, total_label: &str) -> String {
    let current = current_year.to_string();
    if years_desc.contains(&current) {
        current
    } else {
        years_desc
            .first()
            .cloned()
            .unwrap_or_else(|| total_label.to_string())
    }
}

/// `2024-05-01T08:30:00Z`. Sub-second precision is truncated.
pub fn format_updated_at(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// `20240501083000`.
pub fn format_version(time: &DateTime<Utc>) -> String {
    time.format("%Y%m%d%H%M%S").to_string()
}

/// Map each token to `<base_url>/<filename>`, or `None` when no base URL is set.
pub fn build_urls(base_url: &str, files: &TokenMap) -> Option<TokenMap> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    let mut urls = TokenMap::new();
    for (token, filename) in files.iter() {
        urls.insert(token, format!("{base}/{filename}"));
    }
    Some(urls)
}

/// Pretty JSON with 2-space indent and a trailing newline.
pub fn to_json(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest, creating parent directories as needed.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> Result<(), ManifestError> {
    let json = to_json(manifest)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, json)?;
    Ok(())
}

/// Scan and build without writing anything.
pub fn prepare(
    assets_dir: &Path,
    config: &ManifestConfig,
    current_year: i32,
) -> Result<Manifest, ManifestError> {
    let scan = scan::scan(assets_dir, &config.prefix)?;
    Ok(build_manifest(&scan, config, current_year))
}

/// Scan, build, and write. Any scan failure returns before the output is touched.
pub fn generate(
    assets_dir: &Path,
    output: &Path,
    config: &ManifestConfig,
    current_year: i32,
) -> Result<Manifest, ManifestError> {
    let manifest = prepare(assets_dir, config, current_year)?;
    write_manifest(&manifest, output)?;
    Ok(manifest)
}
