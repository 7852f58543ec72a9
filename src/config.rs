//! Config file loading and layering.
//!
//! The normalizer itself never touches the filesystem. This module is the
//! host side: it reads one or more config files, merges them, and hands the
//! result to [`crate::normalize::normalize`].
//!
//! ## Formats
//!
//! - `*.toml`: snake_case keys, see [`stock_config_toml`]
//! - `*.json`: same structure. Keys set to `null` are treated as absent.
//!
//! Either format also accepts the camelCase keys of the original docs host
//! (`themeConfig`, `nav`, `sidebar`, `editLinks`, ...). Every key is renamed
//! to its snake_case form as soon as a file is read, so files using different
//! spellings layer cleanly.
//!
//! ## Layering
//!
//! Files are merged left to right, later files overriding earlier ones:
//!
//! ```text
//! sitenav.toml          ← shared site config
//! sitenav.local.toml    ← overrides (e.g. show_edit_link = false for previews)
//! ```
//!
//! Tables merge key by key. Arrays are replaced wholesale, so an overlay that
//! sets `nav_items` defines the whole nav bar.
//!
//! Each file is checked against the config schema on its own before merging,
//! so unknown keys and wrong types are reported against the file that has
//! them, in that file's format.

use crate::normalize::{ConfigError, NormalizedConfig, normalize};
use crate::types::SiteConfig;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("TOML error in {0}: {1}")]
    Toml(PathBuf, #[source] toml::de::Error),
    #[error("JSON error in {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),
    #[error("Merged config error: {0}")]
    Merged(#[source] toml::de::Error),
    #[error("Unsupported config format (expected .toml or .json): {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Config validation error: {0}")]
    Invalid(#[from] ConfigError),
}

// Alternate spellings per table, mapped to the canonical snake_case key.
const SITE_ALIASES: &[(&str, &str)] = &[("themeConfig", "theme")];
const THEME_ALIASES: &[(&str, &str)] = &[
    ("navItems", "nav_items"),
    ("nav", "nav_items"),
    ("sidebarSections", "sidebar_sections"),
    ("sidebar", "sidebar_sections"),
    ("repoUrl", "repo_url"),
    ("repo", "repo_url"),
    ("repoLabel", "repo_label"),
    ("showEditLink", "show_edit_link"),
    ("editLinks", "show_edit_link"),
    ("editLinkText", "edit_link_text"),
    ("displayAllHeaders", "display_all_headers"),
    ("sidebarDepth", "sidebar_depth"),
];
const NAV_ITEM_ALIASES: &[(&str, &str)] = &[("text", "label")];

fn canonical_key(key: &str, aliases: &[(&str, &str)]) -> String {
    aliases
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or_else(|| key.to_string(), |(_, canonical)| canonical.to_string())
}

/// Rename every aliased key in `table` to its canonical name.
///
/// When one table spells the same key twice, that group is left as written
/// so deserialization reports the duplicate instead of one value silently
/// winning.
fn rename_keys(table: toml::Table, aliases: &[(&str, &str)]) -> toml::Table {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for key in table.keys() {
        *counts.entry(canonical_key(key, aliases)).or_default() += 1;
    }
    table
        .into_iter()
        .map(|(key, value)| {
            let canonical = canonical_key(&key, aliases);
            if counts[&canonical] > 1 {
                (key, value)
            } else {
                (canonical, value)
            }
        })
        .collect()
}

/// Rewrite a raw config value so every key uses its snake_case spelling.
pub fn canonicalize(value: toml::Value) -> toml::Value {
    let toml::Value::Table(site) = value else {
        return value;
    };
    let mut site = rename_keys(site, SITE_ALIASES);
    if let Some(toml::Value::Table(theme)) = site.get_mut("theme") {
        *theme = rename_keys(std::mem::take(theme), THEME_ALIASES);
        if let Some(toml::Value::Array(items)) = theme.get_mut("nav_items") {
            for item in items.iter_mut() {
                if let toml::Value::Table(fields) = item {
                    *fields = rename_keys(std::mem::take(fields), NAV_ITEM_ALIASES);
                }
            }
        }
    }
    toml::Value::Table(site)
}

/// Drop object members that are `null`. TOML has no null, and a host dump
/// writes `null` for settings it leaves unset.
fn strip_nulls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
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

/// Read a single config file as a canonical raw TOML value.
///
/// JSON files are parsed with `serde_json` and converted to a `toml::Value`
/// so both formats can be merged together. The file is checked against
/// [`SiteConfig`] here, and any error carries the file's path and format.
pub fn load_raw_value(path: &Path) -> Result<toml::Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let toml_err = |e: toml::de::Error| LoadError::Toml(path.to_path_buf(), e);
            let value = canonicalize(toml::from_str(&content).map_err(toml_err)?);
            let _: SiteConfig = value.clone().try_into().map_err(toml_err)?;
            Ok(value)
        }
        Some("json") => {
            let json_err = |e: serde_json::Error| LoadError::Json(path.to_path_buf(), e);
            let mut json: serde_json::Value = serde_json::from_str(&content).map_err(json_err)?;
            strip_nulls(&mut json);
            let value = canonicalize(serde_json::from_value(json).map_err(json_err)?);
            let canonical_json = serde_json::to_value(&value).map_err(json_err)?;
            let _: SiteConfig = serde_json::from_value(canonical_json).map_err(json_err)?;
            Ok(value)
        }
        _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load and merge config files, left to right, into a raw [`SiteConfig`].
///
/// No validation happens here; an empty `paths` yields the all-defaults config.
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> Result<SiteConfig, LoadError> {
    let mut merged = toml::Value::Table(toml::Table::new());
    for path in paths {
        merged = merge_toml(merged, load_raw_value(path.as_ref())?);
    }
    let config: SiteConfig = merged.try_into().map_err(LoadError::Merged)?;
    Ok(config)
}

/// Load, merge and normalize in one step.
pub fn load_and_normalize<P: AsRef<Path>>(paths: &[P]) -> Result<NormalizedConfig, LoadError> {
    let raw = load_config(paths)?;
    Ok(normalize(&raw)?)
}


/// Returns a fully-commented stock `sitenav.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# sitenav Configuration
# =====================
# Site navigation for a documentation site. Only `title` and `description`
# are required; everything under [theme] is optional and shown with its
# default (or commented out when it has none).
#
# Several files can be layered: `sitenav --config a.toml --config b.toml`
# merges b.toml on top of a.toml. Arrays are replaced, not appended.
# Unknown keys will cause an error.

title = "My Project"
description = "Documentation for My Project"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Repository link shown at the right of the nav bar.
# repo_url = "https://github.com/owner/repo"
# repo_label = "GitHub"

# Show an "edit this page" link under every page (needs repo_url).
show_edit_link = false
# edit_link_text = "Edit this page on GitHub"

# Expand the headers of every page in the sidebar, not just the active one.
display_all_headers = false

# Header levels shown under each sidebar entry (0 = page titles only).
sidebar_depth = 1

# ---------------------------------------------------------------------------
# Nav bar, rendered left to right.
# `link` is a site path starting with "/" or an absolute URL.
# ---------------------------------------------------------------------------
[[theme.nav_items]]
label = "Home"
link = "/"

[[theme.nav_items]]
label = "Guide"
link = "/guide/"

# ---------------------------------------------------------------------------
# Sidebar, rendered top to bottom. Every `path` must be unique.
# ---------------------------------------------------------------------------
[[theme.sidebar_sections]]
title = "Introduction"
path = "/guide/"
collapsable = true

[[theme.sidebar_sections]]
title = "Installation"
path = "/guide/install"
collapsable = true
"##
}
