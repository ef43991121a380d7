//! Site configuration module.
//!
//! Handles loading, validating, and overriding `docnav.toml`. Stock
//! defaults are the base layer; the user's file is merged on top, then
//! environment references are expanded, then CLI overrides applied.
//!
//! ## Config File Location
//!
//! Place `docnav.toml` in the source directory (the `--source` flag,
//! current directory by default). Without one, stock defaults apply.
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Angular - Zero to Hero"   # Site display name (required non-empty)
//! base_url = "/angular-workshop-docs" # Path prefix when served from a sub-path
//! site = "https://example.github.io"  # Canonical origin, informational only
//!
//! [social]
//! github = "https://github.com/withastro/starlight"
//!
//! [[sidebar]]
//! label = "Guides"
//! items = [
//!     { label = "Angular CLI", link = "guides/angular-cli/" },
//! ]
//!
//! [[sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//! ```
//!
//! ## Deployment-Supplied Base Path
//!
//! `base_url` and `site` accept environment references, so CI can pick the
//! sub-path without editing the file:
//!
//! - `${VAR}` expands to the value of `VAR`, error if unset
//! - `${VAR:-default}` expands to `VAR` if set, otherwise `default`
//!
//! The `--base-url` flag (or `DOCNAV_BASE_URL`) replaces the configured
//! value outright. Whatever comes out is used as-is; nothing here derives a
//! base path on its own.
//!
//! Unknown keys are rejected to catch typos early.

use crate::sidebar::{ResolveError, validate_group};
use crate::types::SidebarGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// File name looked up in the source directory.
pub const CONFIG_FILE_NAME: &str = "docnav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config validation error: {0}")]
    Sidebar(#[from] ResolveError),
    #[error("{field}: {message}")]
    Env { field: &'static str, message: String },
}

/// Site configuration loaded from `docnav.toml`.
///
/// Every field has a default, so a config file only needs the values it
/// wants to set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name for the site.
    pub title: String,
    /// Path prefix for every site-relative link; empty when served from `/`.
    pub base_url: String,
    /// Canonical absolute origin. Carried through, never used for links.
    pub site: String,
    /// Platform name → profile URL.
    pub social: BTreeMap<String, String>,
    /// Sidebar groups in display order.
    pub sidebar: Vec<SidebarGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            base_url: String::new(),
            site: String::new(),
            social: BTreeMap::new(),
            sidebar: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate the title and every sidebar group.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title cannot be empty".into()));
        }
        for group in &self.sidebar {
            validate_group(group)?;
        }
        Ok(())
    }

    /// Expand `${VAR}` references in `base_url` and `site`.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base_url = expand_env(&self.base_url, "base_url")?;
        self.site = expand_env(&self.site, "site")?;
        Ok(())
    }

    /// Apply CLI settings on top of the loaded configuration.
    pub fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
    }
}

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override.
#[derive(Debug, Default, Clone)]
pub struct CliSettings {
    /// Replace the configured base path.
    pub base_url: Option<String>,
}

fn expand_env(value: &str, field: &'static str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(|expanded| expanded.into_owned())
        .map_err(|e| ConfigError::Env {
            field,
            message: format!("environment variable {} is not set", e.var_name),
        })
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
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

/// Load `docnav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize.
///
/// Environment expansion and validation happen here too, so the returned
/// config is ready for resolution.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    config.expand_env_vars()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `docnav.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_with(dir, &CliSettings::default())
}

/// Load config and apply CLI settings.
///
/// CLI settings win over both the file and its environment references.
pub fn load_config_with(dir: &Path, settings: &CliSettings) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        info!(dir = %dir.display(), "no {CONFIG_FILE_NAME} found, using stock defaults");
    }
    let mut config = resolve_config(stock_defaults_value()?, overlay)?;
    config.apply_cli_settings(settings);
    info!(
        title = %config.title,
        base_url = %config.base_url,
        groups = config.sidebar.len(),
        "loaded site config"
    );
    Ok(config)
}

/// Returns a fully-commented stock `docnav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Configuration
# ====================
# Values shown are examples; every key is optional except that `title`
# must not be empty. Unknown keys cause an error.

# Display name of the site.
title = "Documentation"

# Path prefix for site-relative links when the site is served from a
# sub-path, e.g. "/my-docs". Leave empty when served from the domain root.
# Environment references are expanded: "${BASE_PATH:-}" lets CI decide.
base_url = ""

# Canonical absolute origin, e.g. "https://example.github.io".
# Passed through to the manifest; never used to build links.
site = ""

# ---------------------------------------------------------------------------
# Social links (platform name -> URL), passed through unchanged
# ---------------------------------------------------------------------------
[social]
# github = "https://github.com/you/your-project"

# ---------------------------------------------------------------------------
# Sidebar
# ---------------------------------------------------------------------------
# Each group has a label and EITHER an `items` list OR an `autogenerate`
# table, never both. Order here is the order rendered.
#
# Links are joined with base_url: "guides/intro/" becomes
# "/my-docs/guides/intro/". Links that already start with base_url are
# left alone. A "{base}" placeholder marks where base_url goes explicitly.
# Absolute URLs ("https://...") are never touched.

[[sidebar]]
label = "Guides"
# collapsed = false
items = [
    { label = "Getting Started", link = "guides/getting-started/" },
]

[[sidebar]]
label = "Reference"
# The site engine lists this directory's pages at build time.
autogenerate = { directory = "reference" }
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Documentation");
        assert_eq!(config.base_url, "");
        assert_eq!(config.site, "");
        assert!(config.social.is_empty());
        assert!(config.sidebar.is_empty());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(r#"base_url = "/docs""#).unwrap();
        assert_eq!(config.base_url, "/docs");
        assert_eq!(config.title, "Documentation");
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"base = "/docs""#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_title_rejected() {
        let config = SiteConfig {
            title: "  ".to_string(),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn invalid_group_fails_validation_with_label() {
        let mut group = SidebarGroup::with_items("Broken", [("A", "a/")]);
        group.autogenerate = SidebarGroup::autogenerated("x", "reference").autogenerate;
        let config = SiteConfig {
            sidebar: vec![group],
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Sidebar(_)));
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn stock_config_parses_and_validates() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.sidebar.len(), 2);
        assert_eq!(config.sidebar[0].label, "Guides");
        assert!(config.sidebar[1].autogenerate.is_some());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_overlay_table_keys() {
        let base: toml::Value = toml::from_str(
            r#"
title = "Docs"
[social]
github = "https://github.com/a"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[social]
mastodon = "https://m.example/@a"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let config: SiteConfig = merged.try_into().unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.social.len(), 2);
    }

    #[test]
    fn merge_replaces_arrays() {
        let base: toml::Value = toml::from_str(
            r#"
[[sidebar]]
label = "Old"
items = []
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[[sidebar]]
label = "New"
autogenerate = { directory = "reference" }
"#,
        )
        .unwrap();
        let config: SiteConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.sidebar.len(), 1);
        assert_eq!(config.sidebar[0].label, "New");
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = write_config(
            r#"
title = "Angular - Zero to Hero"
base_url = "/angular-workshop-docs"

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#,
        );
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Angular - Zero to Hero");
        assert_eq!(config.base_url, "/angular-workshop-docs");
        assert_eq!(config.sidebar.len(), 1);
        // Unspecified values are defaults
        assert_eq!(config.site, "");
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let tmp = write_config("title = ");
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_rejects_group_with_neither() {
        let tmp = write_config(
            r#"
[[sidebar]]
label = "Hollow"
"#,
        );
        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Hollow"));
    }

    #[test]
    fn load_fixture_config() {
        let tmp = setup_fixture("workshop");
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, workshop_config(""));
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn cli_base_url_overrides_file() {
        let tmp = write_config(r#"base_url = "/from-file""#);
        let settings = CliSettings {
            base_url: Some("/from-cli".to_string()),
        };
        let config = load_config_with(tmp.path(), &settings).unwrap();
        assert_eq!(config.base_url, "/from-cli");
    }

    #[test]
    fn cli_settings_empty_keeps_file_value() {
        let mut config = SiteConfig {
            base_url: "/kept".to_string(),
            ..SiteConfig::default()
        };
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.base_url, "/kept");
    }

    #[test]
    fn env_reference_in_base_url_expanded() {
        // SAFETY: test-only variable name, not read elsewhere.
        unsafe {
            std::env::set_var("DOCNAV_TEST_BASE_PATH", "/from-env");
        }
        let tmp = write_config(r#"base_url = "${DOCNAV_TEST_BASE_PATH}""#);
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.base_url, "/from-env");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_BASE_PATH");
        }
    }

    #[test]
    fn env_reference_default_used_when_unset() {
        let tmp = write_config(r#"base_url = "${DOCNAV_TEST_UNSET_BASE:-/fallback}""#);
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.base_url, "/fallback");
    }

    #[test]
    fn env_reference_unset_is_error() {
        let tmp = write_config(r#"site = "${DOCNAV_TEST_UNSET_SITE}""#);
        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Env { field: "site", .. }));
        assert!(err.to_string().contains("DOCNAV_TEST_UNSET_SITE"));
    }
}
