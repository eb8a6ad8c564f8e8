//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` found in the
//! content root. Stock defaults are overridden by whatever the user's file
//! specifies; a missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Huguinho"        # Site title, shown in every page header
//! author = ""               # Optional author line in the footer
//! front_matter = "lines"    # "lines" (key: value) or "toml" (+++ fenced table)
//!
//! [homepage]
//! articles = 10             # Most recent articles listed on the homepage
//! prominent_topics = 30     # Most used topics linked from the homepage
//!
//! [listing]
//! prominent_topics = 30     # Most used topics linked from each topic page
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! [`BuildOptions`] holds the per-run settings that come from the command
//! line rather than from the site itself.

use crate::frontmatter::Dialect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

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
    pub title: String,
    /// Empty means no author line.
    pub author: String,
    /// Front-matter dialect every article is written in.
    pub front_matter: Dialect,
    pub homepage: HomepageConfig,
    pub listing: ListingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Huguinho".to_string(),
            author: String::new(),
            front_matter: Dialect::Lines,
            homepage: HomepageConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be blank".into()));
        }
        if self.homepage.articles == 0 {
            return Err(ConfigError::Validation(
                "homepage.articles must be greater than 0".into(),
            ));
        }
        if self.homepage.prominent_topics == 0 {
            return Err(ConfigError::Validation(
                "homepage.prominent_topics must be greater than 0".into(),
            ));
        }
        if self.listing.prominent_topics == 0 {
            return Err(ConfigError::Validation(
                "listing.prominent_topics must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomepageConfig {
    /// Number of most recent articles listed.
    pub articles: usize,
    /// Number of most used topics linked.
    pub prominent_topics: usize,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            articles: 10,
            prominent_topics: 30,
        }
    }
}

/// Settings shared by every per-topic listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    pub prominent_topics: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            prominent_topics: 30,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config from `config.toml` in the content root.
pub fn load_config(content_root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(content_root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Huguinho Configuration
# ======================
# Place this file in the content root as config.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Site title, shown in the header of every page.
title = "Huguinho"

# Author line shown in the footer. Leave empty to omit it.
author = ""

# Front-matter dialect used by every article:
#   "lines" -> "key: value" lines, then +++, then the markdown body
#   "toml"  -> +++, a TOML table, +++, then the markdown body
front_matter = "lines"

# ---------------------------------------------------------------------------
# Homepage
# ---------------------------------------------------------------------------
[homepage]
# Number of most recent articles listed.
articles = 10

# Number of most used topics linked.
prominent_topics = 30

# ---------------------------------------------------------------------------
# Topic pages (topics/<topic>/index.html)
# ---------------------------------------------------------------------------
[listing]
# Number of most used topics linked from each topic page.
prominent_topics = 30
"##
}

// =============================================================================
// Build options
// =============================================================================

/// Per-run settings taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub content_root: PathBuf,
    pub output_root: PathBuf,
    /// Prefix for root-relative links when the site is served from a
    /// sub-directory. Empty means the site lives at the domain root.
    pub base_path: String,
    pub with_drafts: bool,
    pub with_future: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content"),
            output_root: PathBuf::from("rendered"),
            base_path: String::new(),
            with_drafts: false,
            with_future: false,
        }
    }
}

impl BuildOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content root must not be empty".into(),
            ));
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output root must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Validate the options, then load the site config from the content
    /// root. Nothing is read when the options are invalid.
    pub fn load_site_config(&self) -> Result<SiteConfig, ConfigError> {
        self.validate()?;
        load_config(&self.content_root)
    }
}
