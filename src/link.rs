//! Link classification for navigation entries.
//!
//! A nav link is either a path inside the generated site or an absolute URL
//! pointing somewhere else. Nothing in between is accepted:
//!
//! - `"/"`, `"/guide/"`, `"/guide/install#setup"` → [`LinkKind::Internal`]
//! - `"https://elm-lang.org"`, `"mailto:docs@example.com"` → [`LinkKind::External`]
//! - `"guide/"`, `"//cdn.example.com"`, `"javascript:void(0)"` → rejected

use serde::{Deserialize, Serialize};

/// Where a navigation link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Path rooted at the site root.
    Internal,
    /// Absolute URL outside the site.
    External,
}

/// Classify a link, or return `None` if it is neither a site-rooted path nor
/// an absolute URL.
pub fn classify_link(link: &str) -> Option<LinkKind> {
    if link.starts_with('/') {
        // Protocol-relative URLs would silently inherit the page's scheme.
        if link.starts_with("//") {
            return None;
        }
        return Some(LinkKind::Internal);
    }

    let parsed = url::Url::parse(link).ok()?;
    if parsed.has_host() || matches!(parsed.scheme(), "mailto" | "tel") {
        Some(LinkKind::External)
    } else {
        None
    }
}
