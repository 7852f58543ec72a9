//! CLI output formatting.
//!
//! Output is an inventory of the normalized navigation, in render order. Each
//! entry follows the same two-level pattern: a header line with a 1-based
//! positional index and the label, then indented context lines.
//!
//! ```text
//! Site
//!     Title: Docs
//!     Description: Project documentation
//!
//! Nav
//! 001 Home
//!     Link: /
//! 002 Elm (external)
//!     Link: https://elm-lang.org
//!
//! Sidebar
//! 001 Introduction
//!     Path: /guide/
//!     Collapsable: yes
//!
//! Settings
//!     Repository: https://github.com/org/docs (GitHub Repo)
//!     Edit links: on ("Edit on GitHub")
//!     Display all headers: off
//!     Sidebar depth: 1
//! ```
//!
//! `format_*` functions return `Vec<String>` and do no I/O; `print_*`
//! wrappers write them to stdout.

use crate::link::LinkKind;
use crate::normalize::NormalizedConfig;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Format the full inventory of a normalized config.
pub fn format_normalized(config: &NormalizedConfig) -> Vec<String> {
    let theme = &config.theme;
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Title: {}", indent(1), config.title),
        format!("{}Description: {}", indent(1), config.description),
    ];

    if !theme.nav_items.is_empty() {
        lines.push(String::new());
        lines.push("Nav".to_string());
        for (i, item) in theme.nav_items.iter().enumerate() {
            let header = match item.kind {
                LinkKind::Internal => format!("{} {}", format_index(i + 1), item.label),
                LinkKind::External => {
                    format!("{} {} (external)", format_index(i + 1), item.label)
                }
            };
            lines.push(header);
            lines.push(format!("{}Link: {}", indent(1), item.link));
        }
    }

    if !theme.sidebar_sections.is_empty() {
        lines.push(String::new());
        lines.push("Sidebar".to_string());
        for (i, section) in theme.sidebar_sections.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), section.title));
            lines.push(format!("{}Path: {}", indent(1), section.path));
            let collapsable = if section.collapsable { "yes" } else { "no" };
            lines.push(format!("{}Collapsable: {}", indent(1), collapsable));
        }
    }

    lines.push(String::new());
    lines.push("Settings".to_string());
    if let Some(url) = &theme.repo_url {
        match &theme.repo_label {
            Some(label) => lines.push(format!("{}Repository: {} ({})", indent(1), url, label)),
            None => lines.push(format!("{}Repository: {}", indent(1), url)),
        }
    }
    match (&theme.edit_link_text, theme.show_edit_link) {
        (Some(text), true) => lines.push(format!("{}Edit links: on (\"{}\")", indent(1), text)),
        _ => lines.push(format!(
            "{}Edit links: {}",
            indent(1),
            on_off(theme.show_edit_link)
        )),
    }
    lines.push(format!(
        "{}Display all headers: {}",
        indent(1),
        on_off(theme.display_all_headers)
    ));
    lines.push(format!("{}Sidebar depth: {}", indent(1), theme.sidebar_depth));

    lines
}

/// Format non-fatal diagnostics, one per line.
pub fn format_warnings(warnings: &[String]) -> Vec<String> {
    warnings
        .iter()
        .map(|warning| format!("Warning: {}", warning))
        .collect()
}

pub fn print_normalized(config: &NormalizedConfig) {
    for line in format_normalized(config) {
        println!("{}", line);
    }
}

pub fn print_warnings(warnings: &[String]) {
    for line in format_warnings(warnings) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::test_helpers::*;

    #[test]
    fn minimal_config_shows_site_and_settings_only() {
        let config = normalize(&minimal_config()).unwrap();
        let lines = format_normalized(&config);
        assert_eq!(
            lines,
            vec![
                "Site",
                "    Title: Docs",
                "    Description: d",
                "",
                "Settings",
                "    Edit links: off",
                "    Display all headers: off",
                "    Sidebar depth: 1",
            ]
        );
    }

    #[test]
    fn nav_items_are_indexed_and_external_marked() {
        let config = normalize(&with_nav(&[
            ("Home", "/"),
            ("Elm", "https://elm-lang.org"),
        ]))
        .unwrap();
        let lines = format_normalized(&config);
        assert!(lines.contains(&"Nav".to_string()));
        assert!(lines.contains(&"001 Home".to_string()));
        assert!(lines.contains(&"    Link: /".to_string()));
        assert!(lines.contains(&"002 Elm (external)".to_string()));
        assert!(lines.contains(&"    Link: https://elm-lang.org".to_string()));
    }

    #[test]
    fn sidebar_sections_show_path_and_collapsable() {
        let mut raw = with_sidebar(&["/guide/", "/guide/core-language"]);
        raw.theme.sidebar_sections[1].collapsable = false;
        let config = normalize(&raw).unwrap();
        let lines = format_normalized(&config);

        let start = lines.iter().position(|l| l == "Sidebar").unwrap();
        assert_eq!(
            &lines[start + 1..start + 7],
            &[
                "001 Section 0",
                "    Path: /guide/",
                "    Collapsable: yes",
                "002 Section 1",
                "    Path: /guide/core-language",
                "    Collapsable: no",
            ]
        );
    }

    #[test]
    fn repository_and_edit_text_shown_in_settings() {
        let mut raw = minimal_config();
        raw.theme.repo_url = Some("https://github.com/org/docs".to_string());
        raw.theme.repo_label = Some("GitHub Repo".to_string());
        raw.theme.show_edit_link = true;
        raw.theme.edit_link_text = Some("Edit on GitHub".to_string());
        let config = normalize(&raw).unwrap();
        let lines = format_normalized(&config);
        assert!(lines.contains(
            &"    Repository: https://github.com/org/docs (GitHub Repo)".to_string()
        ));
        assert!(lines.contains(&"    Edit links: on (\"Edit on GitHub\")".to_string()));
    }

    #[test]
    fn edit_text_hidden_when_edit_links_off() {
        let mut raw = minimal_config();
        raw.theme.edit_link_text = Some("Edit".to_string());
        let config = normalize(&raw).unwrap();
        assert!(format_normalized(&config).contains(&"    Edit links: off".to_string()));
    }

    #[test]
    fn warnings_are_prefixed() {
        let lines = format_warnings(&["something odd".to_string()]);
        assert_eq!(lines, vec!["Warning: something odd"]);
    }
}
