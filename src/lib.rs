//! # sitenav
//!
//! Validation and normalization for the navigation config of a documentation
//! site: the top nav bar, the sidebar, repository and edit links.
//!
//! A static site generator hands over a declarative config object once at
//! startup. `sitenav` checks it and returns a [`NormalizedConfig`] with every
//! default filled in, or the first problem it finds as a typed
//! [`ConfigError`]. The host decides what to do with an error; the CLI aborts.
//!
//! ```text
//! raw SiteConfig  →  normalize()  →  NormalizedConfig  →  rendering host
//!                         ↓
//!                    ConfigError
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Raw config records as the host declares them (`SiteConfig`, `NavItem`, `SidebarSection`) |
//! | [`normalize`] | Validation in a fixed order, defaulting, and the normalized model |
//! | [`link`] | Site-path vs absolute-URL classification for nav links |
//! | [`config`] | Host side: TOML/JSON loading, layered merging, the stock config template |
//! | [`output`] | CLI output formatting: inventory of the normalized navigation |
//!
//! # Design Decisions
//!
//! ## Pure Core
//!
//! [`normalize()`] takes a borrowed config and returns a new value. No I/O,
//! no global state, no logging. The normalized config is meant to be built
//! once and passed explicitly to the renderer, never read from a global.
//!
//! ## Deterministic Errors
//!
//! Checks run in a fixed order and the first failure wins, so a broken config
//! always reports the same error. There is no partial success.
//!
//! ## Lenient Parsing, Strict Validation
//!
//! Missing strings deserialize as empty and a negative `sidebar_depth` is
//! representable, so missing fields, bad entries, duplicate paths and
//! negative depths surface as a [`ConfigError`] rather than an opaque parse
//! error. Type mismatches (a `sidebar_depth` of `1.5` or `"2"`) and unknown
//! keys are still rejected at parse time, by the loader in [`config`].

pub mod config;
pub mod link;
pub mod normalize;
pub mod output;
pub mod types;

pub use normalize::{ConfigError, NormalizedConfig, normalize};
pub use types::{NavItem, SidebarSection, SiteConfig, ThemeConfig};

#[cfg(test)]
pub(crate) mod test_helpers;
