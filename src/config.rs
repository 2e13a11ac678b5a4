//! Manifest configuration.
//!
//! Handles loading and validating the optional TOML config file. Stock
//! defaults reproduce the `github.svg` / `github_YYYY.svg` / `"Total"`
//! convention; a config file overrides just the keys it names.
//!
//! ## Config File Location
//!
//! The config file is only read when passed explicitly with
//! `--config <path>`. Nothing inside the assets directory is ever treated as
//! config, so unrelated files there never affect a run.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//! prefix = "github"        # aggregate = <prefix>.svg, years = <prefix>_YYYY.svg
//! total_label = "Total"    # Token for the aggregate file
//! base_url = ""            # Non-empty enables absolute `urls`
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Manifest configuration loaded from the `--config` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Filename prefix shared by the aggregate and year files.
    pub prefix: String,
    /// Token used for the aggregate file in `years`, `files` and `urls`.
    pub total_label: String,
    /// Base URL for absolute links. Empty disables `urls`.
    pub base_url: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            prefix: "github".to_string(),
            total_label: "Total".to_string(),
            base_url: String::new(),
        }
    }
}

impl ManifestConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Validation("prefix must not be empty".into()));
        }
        if self.prefix.contains(['/', '\\', '.']) {
            return Err(ConfigError::Validation(format!(
                "prefix must be a bare filename stem, got {:?}",
                self.prefix
            )));
        }
        if self.total_label.is_empty() {
            return Err(ConfigError::Validation(
                "total_label must not be empty".into(),
            ));
        }
        if naming::is_year_token(&self.total_label) {
            return Err(ConfigError::Validation(format!(
                "total_label {:?} collides with a year token",
                self.total_label
            )));
        }
        Ok(())
    }

    /// Apply a `--base-url` flag. Empty flags leave the config value alone.
    pub fn with_base_url_override(mut self, base_url: &str) -> Self {
        if !base_url.is_empty() {
            self.base_url = base_url.to_string();
        }
        self
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ManifestConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ManifestConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ManifestConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the manifest config.
///
/// Stock defaults unless an explicit path is given; that path must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<ManifestConfig, ConfigError> {
    let overlay = explicit.map(load_raw_config).transpose()?;
    resolve_config(overlay)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Heatmap Manifest Configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
#
# Pass this file with --config <path>.
# Unknown keys will cause an error.

# Filename prefix. The aggregate file is <prefix>.svg and per-year files
# are <prefix>_YYYY.svg (exactly four digits).
prefix = "github"

# Token for the aggregate file in `years`, `files` and `urls`.
# Must not look like a year.
total_label = "Total"

# Absolute base URL for the optional `urls` map, e.g.
# "https://example.com/assets". Trailing slashes are stripped.
# Empty leaves `urls` out. The --base-url flag overrides this.
base_url = ""
"##
}
