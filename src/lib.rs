//! # docnav
//!
//! Resolves a documentation site's sidebar navigation against the path the
//! site is deployed under. The input is a declarative `docnav.toml` (title,
//! base path, social links, sidebar groups); the output is a JSON manifest
//! with every link joined to the base path, ready for a site engine to
//! render.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load      docnav.toml  →  SiteConfig          (defaults, env, CLI overrides)
//! 2. Resolve   SiteConfig   →  Vec<ResolvedGroup>  (validate, join links)
//! 3. Emit      manifest     →  navigation.json     (for the site engine)
//! ```
//!
//! Loading is the only stage that touches the filesystem or the
//! environment. Resolution is a pure function of the config, safe to call
//! any number of times from any thread.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `docnav.toml` loading, default merging, env expansion, validation |
//! | [`types`] | Declarative sidebar types as written in the config |
//! | [`link`] | Base-path link joining (`resolve_link`) |
//! | [`sidebar`] | Group validation and resolution (`resolve_sidebar`) |
//! | [`manifest`] | The JSON document written for the site engine |
//! | [`output`] | CLI output formatting of the resolved tree |
//!
//! # Design Decisions
//!
//! ## One Join Rule
//!
//! Sidebar configs collected over time disagree on whether links include
//! the base path. [`link::resolve_link`] accepts every variant (bare,
//! slash-prefixed, already prefixed, `{base}` placeholder) and produces the
//! same href for each, so no config needs special-casing.
//!
//! ## Autogenerated Groups Stay Deferred
//!
//! A group can ask for its links to come from a content directory. Listing
//! that directory is the site engine's job; docnav only passes the
//! directory name along as [`sidebar::ResolvedGroup::Deferred`].
//!
//! ## Fail Before Output
//!
//! A group with both `items` and `autogenerate`, or neither, is rejected
//! with its label before anything is resolved or written.

pub mod config;
pub mod link;
pub mod manifest;
pub mod output;
pub mod sidebar;
pub mod types;

pub use config::{CliSettings, ConfigError, SiteConfig, load_config, load_config_with};
pub use link::resolve_link;
pub use manifest::{NavigationManifest, build_manifest};
pub use sidebar::{ResolveError, ResolvedGroup, ResolvedLink, resolve_sidebar};

#[cfg(test)]
pub(crate) mod test_helpers;
