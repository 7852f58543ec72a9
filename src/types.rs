//! Raw site configuration records.
//!
//! These mirror the declarative config object as the host supplies it, before
//! any validation. Everything the author may leave out has a serde default, so
//! a sparse file deserializes cleanly and the gaps are reported later by
//! [`crate::normalize::normalize`] as typed errors rather than parse errors.
//!
//! Field names are snake_case. Each field also accepts its camelCase spelling
//! and the key the original documentation host used, so a config object
//! dumped from that host loads unchanged:
//!
//! ```json
//! {
//!   "title": "Docs",
//!   "description": "Project documentation",
//!   "themeConfig": {
//!     "nav": [{ "text": "Guide", "link": "/guide/" }],
//!     "sidebar": [{ "title": "Intro", "path": "/guide/", "collapsable": false }],
//!     "repo": "https://github.com/org/docs",
//!     "editLinks": true,
//!     "sidebarDepth": 2
//!   }
//! }
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};

/// Top-level declarative description of a documentation site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header.
    pub title: String,
    /// Site description, used for the `<meta name="description">` tag.
    pub description: String,
    /// Navigation and sidebar settings.
    #[serde(alias = "themeConfig")]
    pub theme: ThemeConfig,
}

/// Navigation, sidebar and repository settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Top navigation bar entries, rendered left to right.
    #[serde(alias = "navItems", alias = "nav")]
    pub nav_items: Vec<NavItem>,
    /// Sidebar groups, rendered top to bottom.
    #[serde(alias = "sidebarSections", alias = "sidebar")]
    pub sidebar_sections: Vec<SidebarSection>,
    #[serde(
        alias = "repoUrl",
        alias = "repo",
        skip_serializing_if = "Option::is_none"
    )]
    pub repo_url: Option<String>,
    #[serde(alias = "repoLabel", skip_serializing_if = "Option::is_none")]
    pub repo_label: Option<String>,
    /// Show an "edit this page" link at the bottom of every page.
    #[serde(alias = "showEditLink", alias = "editLinks")]
    pub show_edit_link: bool,
    /// Label of the edit link. Left to the host when absent.
    #[serde(alias = "editLinkText", skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
    /// Expand the headers of every page in the sidebar, not just the active one.
    #[serde(alias = "displayAllHeaders")]
    pub display_all_headers: bool,
    /// How many header levels the sidebar shows. Signed so that a negative
    /// value survives parsing and can be reported.
    #[serde(alias = "sidebarDepth", skip_serializing_if = "Option::is_none")]
    pub sidebar_depth: Option<i64>,
}

/// One entry in the top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavItem {
    #[serde(alias = "text")]
    pub label: String,
    /// Site path (`/guide/`) or absolute URL (`https://example.com`).
    pub link: String,
}

/// One collapsible group of pages in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarSection {
    pub title: String,
    /// Site path of the section's landing page. Unique across the sidebar.
    pub path: String,
    pub collapsable: bool,
}

impl Default for SidebarSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            path: String::new(),
            collapsable: true,
        }
    }
}

impl NavItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

impl SidebarSection {
    pub fn new(title: impl Into<String>, path: impl Into<String>, collapsable: bool) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            collapsable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.sidebar_depth, None);
        assert!(!config.theme.show_edit_link);
    }

    #[test]
    fn parse_snake_case_toml() {
        let toml = r#"
title = "Docs"
description = "d"

[theme]
show_edit_link = true
sidebar_depth = 2

[[theme.nav_items]]
label = "Guide"
link = "/guide/"

[[theme.sidebar_sections]]
title = "Intro"
path = "/guide/"
collapsable = false
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.theme.nav_items, vec![NavItem::new("Guide", "/guide/")]);
        assert_eq!(
            config.theme.sidebar_sections,
            vec![SidebarSection::new("Intro", "/guide/", false)]
        );
        assert!(config.theme.show_edit_link);
        assert_eq!(config.theme.sidebar_depth, Some(2));
    }

    #[test]
    fn parse_host_style_json() {
        let json = r#"{
            "title": "Docs",
            "description": "d",
            "themeConfig": {
                "nav": [{ "text": "Home", "link": "/" }],
                "sidebar": [{ "title": "Intro", "path": "/guide/" }],
                "repo": "https://github.com/org/docs",
                "repoLabel": "GitHub Repo",
                "editLinks": true,
                "editLinkText": "Edit on GitHub",
                "displayAllHeaders": true,
                "sidebarDepth": 1
            }
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme.nav_items[0].label, "Home");
        assert_eq!(
            config.theme.repo_url.as_deref(),
            Some("https://github.com/org/docs")
        );
        assert_eq!(config.theme.repo_label.as_deref(), Some("GitHub Repo"));
        assert_eq!(config.theme.edit_link_text.as_deref(), Some("Edit on GitHub"));
        assert!(config.theme.show_edit_link);
        assert!(config.theme.display_all_headers);
    }

    #[test]
    fn sidebar_section_collapsable_defaults_to_true() {
        let json = r#"{ "title": "Intro", "path": "/guide/" }"#;
        let section: SidebarSection = serde_json::from_str(json).unwrap();
        assert!(section.collapsable);
    }

    #[test]
    fn missing_strings_default_to_empty() {
        let json = r#"{ "theme": { "nav_items": [{ "link": "/" }] } }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title, "");
        assert_eq!(config.theme.nav_items[0].label, "");
    }

    #[test]
    fn negative_depth_survives_parsing() {
        let config: SiteConfig = toml::from_str("[theme]\nsidebar_depth = -3").unwrap();
        assert_eq!(config.theme.sidebar_depth, Some(-3));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[theme]\nsidebar_dpeth = 2");
        assert!(result.is_err());
    }
}
