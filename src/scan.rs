//! Assets directory scanning.
//!
//! Lists the assets directory once, checks the required aggregate file, and
//! collects every `<prefix>_<YYYY>.svg` alongside the newest modification time
//! among the files that end up in the manifest.
//!
//! ## Validation
//!
//! The scanner enforces two rules, both before anything is written:
//! - The assets directory exists and is a directory
//! - The aggregate `<prefix>.svg` exists and is a regular file
//!
//! Everything else (unrelated files, subdirectories, year-like names with the
//! wrong digit count) is skipped silently.

use crate::naming;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("assets directory does not exist: {}", .0.display())]
    MissingAssetsDir(PathBuf),
    #[error("missing required file: {}", .0.display())]
    MissingRequiredFile(PathBuf),
    #[error("cannot read {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Everything the manifest needs from the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Filename of the aggregate file (e.g. `github.svg`).
    pub aggregate_file: String,
    /// Year → filename. Iteration order is ascending; callers sort as needed.
    pub years: BTreeMap<String, String>,
    /// Newest mtime across the aggregate and every year file.
    pub latest_modified: SystemTime,
}

pub fn scan(assets_dir: &Path, prefix: &str) -> Result<ScanResult, ScanError> {
    if !assets_dir.is_dir() {
        return Err(ScanError::MissingAssetsDir(assets_dir.to_path_buf()));
    }

    let aggregate_file = naming::aggregate_filename(prefix);
    let aggregate_path = assets_dir.join(&aggregate_file);
    if !aggregate_path.is_file() {
        return Err(ScanError::MissingRequiredFile(aggregate_path));
    }
    let mut latest_modified = modified_time(&aggregate_path)?;

    let mut years = BTreeMap::new();
    for entry in fs::read_dir(assets_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        // Non-UTF-8 names can't match the ASCII pattern
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(year) = naming::parse_year_filename(prefix, name) else {
            continue;
        };
        // Follow symlinks so a linked SVG counts like a real one
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|source| ScanError::Metadata {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata
            .modified()
            .map_err(|source| ScanError::Metadata { path, source })?;
        latest_modified = latest_modified.max(modified);
        years.insert(year.to_string(), name.to_string());
    }

    Ok(ScanResult {
        aggregate_file,
        years,
        latest_modified,
    })
}

fn modified_time(path: &Path) -> Result<SystemTime, ScanError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| ScanError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}
