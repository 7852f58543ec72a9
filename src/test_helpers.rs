//! Shared test utilities for the sitenav test suite.
//!
//! Provides config builders and ordering assertions for normalized output.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = with_nav(&[("Home", "/"), ("Guide", "/guide/")]);
//! let normalized = normalize(&config).unwrap();
//! assert_nav_labels(&normalized, &["Home", "Guide"]);
//! ```

use crate::normalize::NormalizedConfig;
use crate::types::{NavItem, SidebarSection, SiteConfig};

// =========================================================================
// Builders
// =========================================================================

/// The smallest config that normalizes: a title and a description.
pub fn minimal_config() -> SiteConfig {
    SiteConfig {
        title: "Docs".to_string(),
        description: "d".to_string(),
        ..SiteConfig::default()
    }
}

/// Minimal config with the given `(label, link)` nav items.
pub fn with_nav(items: &[(&str, &str)]) -> SiteConfig {
    let mut config = minimal_config();
    config.theme.nav_items = items
        .iter()
        .map(|(label, link)| NavItem::new(*label, *link))
        .collect();
    config
}

/// Minimal config with one collapsable sidebar section per path.
///
/// Section titles are derived from their position (`Section 0`, `Section 1`, ...).
pub fn with_sidebar(paths: &[&str]) -> SiteConfig {
    let mut config = minimal_config();
    config.theme.sidebar_sections = paths
        .iter()
        .enumerate()
        .map(|(i, path)| SidebarSection::new(format!("Section {i}"), *path, true))
        .collect();
    config
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the normalized nav bar labels, in order.
pub fn assert_nav_labels(config: &NormalizedConfig, expected: &[&str]) {
    let actual: Vec<&str> = config
        .theme
        .nav_items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(actual, expected, "nav labels mismatch");
}

/// Assert the normalized sidebar paths, in order.
pub fn assert_sidebar_paths(config: &NormalizedConfig, expected: &[&str]) {
    let actual: Vec<&str> = config
        .theme
        .sidebar_sections
        .iter()
        .map(|section| section.path.as_str())
        .collect();
    assert_eq!(actual, expected, "sidebar paths mismatch");
}
