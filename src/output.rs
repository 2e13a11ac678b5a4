//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! manifest written: assets/github_manifest.json
//! ```
//!
//! ## Check
//!
//! ```text
//! Assets: assets
//! Default: 2024
//! Updated: 2024-05-01T08:30:00Z (version 20240501083000)
//! Years
//!     Total → github.svg
//!         URL: https://example.com/assets/github.svg
//!     2024 → github_2024.svg
//!         URL: https://example.com/assets/github_2024.svg
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! do no I/O.

use crate::manifest::Manifest;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_write_output(output: &Path) -> Vec<String> {
    vec![format!("manifest written: {}", output.display())]
}

pub fn print_write_output(output: &Path) {
    for line in format_write_output(output) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(manifest: &Manifest, assets_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        format!("Assets: {}", assets_dir.display()),
        format!("Default: {}", manifest.default_year),
        format!(
            "Updated: {} (version {})",
            manifest.updated_at, manifest.version
        ),
        "Years".to_string(),
    ];

    for (token, filename) in manifest.files.iter() {
        lines.push(format!("{}{} → {}", indent(1), token, filename));
        if let Some(url) = manifest.urls.as_ref().and_then(|u| u.get(token)) {
            lines.push(format!("{}URL: {}", indent(2), url));
        }
    }

    lines
}

pub fn print_check_output(manifest: &Manifest, assets_dir: &Path) {
    for line in format_check_output(manifest, assets_dir) {
        println!("{}", line);
    }
}
