//! # Heatmap Manifest
//!
//! Generates a JSON manifest describing per-year SVG heatmaps so a web page
//! can pick the right file without listing a directory. The filesystem is the
//! data source: `github.svg` is the aggregate, `github_YYYY.svg` are years.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan    assets/   →  ScanResult   (aggregate, year files, newest mtime)
//! 2. Build   scan      →  Manifest     (order, default year, timestamps, urls)
//! 3. Write   manifest  →  github_manifest.json
//! ```
//!
//! Scanning is the only step that can fail on missing inputs, and it runs to
//! completion before anything is written, so a failed run never leaves a
//! half-updated manifest behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `<prefix>_<YYYY>.svg` filename convention parser |
//! | [`scan`] | Lists the assets directory, enforces required inputs, tracks mtimes |
//! | [`manifest`] | Builds, serializes, and writes the manifest document |
//! | [`config`] | Optional `--config` TOML loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Timestamps From Files, Not the Clock
//!
//! `updated_at` and `version` come from the newest modification time among the
//! heatmap files. Re-running over unchanged files produces byte-identical
//! output, so the manifest only changes in version control when a heatmap
//! actually changed. The clock is consulted for one thing: which calendar year
//! counts as "current" for the default.
//!
//! ## Ordered Maps
//!
//! `files` and `urls` are emitted in the same order as `years` (aggregate
//! first, then newest-first). Clients that render a year switcher can iterate
//! either field directly.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
