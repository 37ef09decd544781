//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root; user values are layered over the stock defaults, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"  # Path to content directory
//!
//! [site]
//! title = "Blog"            # Used in page titles
//! posts_path = "posts"      # Post URLs: /posts/{id}/
//! series_path = "series"    # Series pages: /series/...
//!
//! [series]
//! page_size = 10            # Posts per series listing page
//!
//! [posts]
//! include_drafts = false    # Count drafts as published
//! include_future = false    # Count future-dated posts as published
//!
//! [processing]
//! max_processes = 4         # Max parallel parsers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the content root directory.
    #[serde(default = "default_content_root")]
    pub content_root: String,
    /// Site identity and URL layout.
    pub site: SiteSection,
    /// Series listing settings.
    pub series: SeriesConfig,
    /// Which posts count as published.
    pub posts: PostsConfig,
    /// Parallel parsing settings.
    pub processing: ProcessingConfig,
}

fn default_content_root() -> String {
    "content".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            site: SiteSection::default(),
            series: SeriesConfig::default(),
            posts: PostsConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.series.page_size == 0 {
            return Err(ConfigError::Validation(
                "series.page_size must be at least 1".into(),
            ));
        }
        for (key, value) in [
            ("site.posts_path", &self.site.posts_path),
            ("site.series_path", &self.site.series_path),
        ] {
            let trimmed = value.trim_matches('/');
            if trimmed.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if trimmed.split('/').any(|part| part == "..") {
                return Err(ConfigError::Validation(format!(
                    "{key} must not contain '..'"
                )));
            }
        }
        Ok(())
    }
}

/// Site identity and URL layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Site title, appended to page titles.
    pub title: String,
    /// URL prefix of rendered posts (`/{posts_path}/{id}/`).
    pub posts_path: String,
    /// Output and URL prefix of series pages.
    pub series_path: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            posts_path: "posts".to_string(),
            series_path: "series".to_string(),
        }
    }
}

/// Series listing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Number of posts per series listing page.
    pub page_size: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// Publication filter settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostsConfig {
    /// Treat `draft: true` posts as published (useful for local previews).
    pub include_drafts: bool,
    /// Treat posts dated after the build time as published.
    pub include_future: bool,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel post parsers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_some() {
        tracing::debug!(root = %root.display(), "loaded config.toml");
    }
    resolve_config(stock_defaults_value()?, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Series Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the content directory.
# Unknown keys will cause an error.

# Path to content directory
content_root = "content"

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Appended to every generated page title.
title = "Blog"

# URL prefix of rendered posts. Series navigation links point to
# /<posts_path>/<post-id>/.
posts_path = "posts"

# Output directory (and URL prefix) for series pages.
series_path = "series"

# ---------------------------------------------------------------------------
# Series listing pages
# ---------------------------------------------------------------------------
[series]
# Posts per listing page. Longer series are split across /page/2/, /page/3/, ...
page_size = 10

# ---------------------------------------------------------------------------
# Publication filter
# ---------------------------------------------------------------------------
[posts]
# Count `draft: true` posts as published (handy for local previews).
include_drafts = false

# Count posts dated after the build time as published.
include_future = false

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel post parsers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
