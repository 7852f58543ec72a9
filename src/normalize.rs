//! Validation and defaulting of a raw [`SiteConfig`].
//!
//! [`normalize`] is the only entry point. It checks the config in a fixed
//! order and stops at the first violation, so the same input always reports
//! the same error:
//!
//! 1. `title`, then `description`, must be non-empty
//! 2. every nav item needs a label and a site path or absolute URL
//! 3. every sidebar section needs a title and a path
//! 4. sidebar paths must be unique
//! 5. `sidebar_depth`, if set, must be non-negative
//!
//! On success every optional field has its default filled in and the order of
//! nav items and sidebar sections is exactly the input order. Nothing is
//! sorted, trimmed or deduplicated.

use crate::link::{LinkKind, classify_link};
use crate::types::{NavItem, SidebarSection, SiteConfig, ThemeConfig};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Sidebar depth used when the config leaves it out.
pub const DEFAULT_SIDEBAR_DEPTH: u64 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("nav item {0} needs a label and a link that is a site path (/...) or an absolute URL")]
    InvalidNavItem(usize),
    #[error("sidebar section {0} needs a title and a path")]
    InvalidSidebarSection(usize),
    #[error("duplicate sidebar path: {0}")]
    DuplicatePath(String),
    #[error("sidebar depth must be a non-negative integer, got {0}")]
    InvalidDepth(i64),
}

/// Validated navigation model handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedConfig {
    pub title: String,
    pub description: String,
    pub theme: NormalizedTheme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTheme {
    pub nav_items: Vec<NormalizedNavItem>,
    pub sidebar_sections: Vec<SidebarSection>,
    pub repo_url: Option<String>,
    pub repo_label: Option<String>,
    pub show_edit_link: bool,
    pub edit_link_text: Option<String>,
    pub display_all_headers: bool,
    pub sidebar_depth: u64,
}

/// A nav item whose link has been classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedNavItem {
    pub label: String,
    pub link: String,
    pub kind: LinkKind,
}

/// Validate `raw` and fill in defaults.
pub fn normalize(raw: &SiteConfig) -> Result<NormalizedConfig, ConfigError> {
    if is_blank(&raw.title) {
        return Err(ConfigError::MissingField("title"));
    }
    if is_blank(&raw.description) {
        return Err(ConfigError::MissingField("description"));
    }

    let theme = &raw.theme;
    let nav_items = theme
        .nav_items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_nav_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    for (index, section) in theme.sidebar_sections.iter().enumerate() {
        if is_blank(&section.title) || is_blank(&section.path) {
            return Err(ConfigError::InvalidSidebarSection(index));
        }
    }

    let mut seen = HashSet::new();
    for section in &theme.sidebar_sections {
        if !seen.insert(section.path.as_str()) {
            return Err(ConfigError::DuplicatePath(section.path.clone()));
        }
    }

    let sidebar_depth = match theme.sidebar_depth {
        Some(depth) => u64::try_from(depth).map_err(|_| ConfigError::InvalidDepth(depth))?,
        None => DEFAULT_SIDEBAR_DEPTH,
    };

    Ok(NormalizedConfig {
        title: raw.title.clone(),
        description: raw.description.clone(),
        theme: NormalizedTheme {
            nav_items,
            sidebar_sections: theme.sidebar_sections.clone(),
            repo_url: theme.repo_url.clone(),
            repo_label: theme.repo_label.clone(),
            show_edit_link: theme.show_edit_link,
            edit_link_text: theme.edit_link_text.clone(),
            display_all_headers: theme.display_all_headers,
            sidebar_depth,
        },
    })
}

fn normalize_nav_item(index: usize, item: &NavItem) -> Result<NormalizedNavItem, ConfigError> {
    if is_blank(&item.label) {
        return Err(ConfigError::InvalidNavItem(index));
    }
    let kind = classify_link(&item.link).ok_or(ConfigError::InvalidNavItem(index))?;
    Ok(NormalizedNavItem {
        label: item.label.clone(),
        link: item.link.clone(),
        kind,
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl NormalizedConfig {
    /// Non-fatal problems the host may want to surface.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.theme.show_edit_link && self.theme.repo_url.is_none() {
            warnings.push(
                "edit links are enabled but no repository URL is set; the host cannot build them"
                    .to_string(),
            );
        }
        warnings
    }
}

impl From<&NormalizedConfig> for SiteConfig {
    fn from(config: &NormalizedConfig) -> Self {
        let theme = &config.theme;
        SiteConfig {
            title: config.title.clone(),
            description: config.description.clone(),
            theme: ThemeConfig {
                nav_items: theme
                    .nav_items
                    .iter()
                    .map(|item| NavItem::new(&item.label, &item.link))
                    .collect(),
                sidebar_sections: theme.sidebar_sections.clone(),
                repo_url: theme.repo_url.clone(),
                repo_label: theme.repo_label.clone(),
                show_edit_link: theme.show_edit_link,
                edit_link_text: theme.edit_link_text.clone(),
                display_all_headers: theme.display_all_headers,
                // Every normalized depth came from an i64, so this never saturates.
                sidebar_depth: Some(
                    i64::try_from(theme.sidebar_depth).unwrap_or(i64::MAX),
                ),
            },
        }
    }
}

impl From<NormalizedConfig> for SiteConfig {
    fn from(config: NormalizedConfig) -> Self {
        SiteConfig::from(&config)
    }
}
