//! Shared test utilities for the heatmap-manifest test suite.
//!
//! Builds throwaway assets directories and pins file modification times so
//! timestamp-derived manifest fields are predictable.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_assets(&["github.svg", "github_2024.svg"]);
//! set_mtime(&tmp.path().join("github.svg"), epoch_secs(1_700_000_000));
//! ```

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Placeholder content for fixture SVGs. Content is never inspected.
pub const SVG_STUB: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n";

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory containing the named files.
pub fn setup_assets(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in files {
        fs::write(tmp.path().join(name), SVG_STUB).unwrap();
    }
    tmp
}

/// Set a file's modification time.
pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(time))
        .unwrap_or_else(|e| panic!("failed to set mtime on {}: {e}", path.display()));
}

/// Pin every listed file in `dir` to the same mtime.
pub fn pin_mtimes(dir: &Path, files: &[&str], time: SystemTime) {
    for name in files {
        set_mtime(&dir.join(name), time);
    }
}

/// `SystemTime` at the given number of seconds after the Unix epoch.
pub fn epoch_secs(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

// =========================================================================
// Manifest lookups
// =========================================================================

/// Read a written manifest back as loosely-typed JSON. Panics on failure.
pub fn read_manifest_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("{} is not valid JSON: {e}", path.display()))
}
