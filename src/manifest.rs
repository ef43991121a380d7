//! The navigation manifest handed to the site engine.
//!
//! `docnav resolve` writes this as pretty JSON (`navigation.json` by
//! default). It carries the resolved sidebar plus the site-wide values the
//! engine needs next to it. `base_url` is recorded so consumers can tell
//! which prefix the hrefs were built with.
//!
//! ```json
//! {
//!   "title": "Angular - Zero to Hero",
//!   "base_url": "/angular-workshop-docs",
//!   "social": { "github": "https://github.com/withastro/starlight" },
//!   "sidebar": [
//!     { "kind": "links", "label": "Guides", "collapsed": false,
//!       "items": [{ "label": "Angular CLI",
//!                   "href": "/angular-workshop-docs/guides/angular-cli/" }] },
//!     { "kind": "deferred", "label": "Reference", "collapsed": false,
//!       "directory": "reference" }
//!   ]
//! }
//! ```

use crate::config::SiteConfig;
use crate::sidebar::{ResolveError, ResolvedGroup, resolve_sidebar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default file name for the written manifest.
pub const MANIFEST_FILE_NAME: &str = "navigation.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationManifest {
    pub title: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social: BTreeMap<String, String>,
    pub sidebar: Vec<ResolvedGroup>,
}

impl NavigationManifest {
    /// Number of explicit links across all groups.
    pub fn link_count(&self) -> usize {
        self.sidebar.iter().map(|g| g.items().len()).sum()
    }

    /// Number of groups left for the engine to expand.
    pub fn deferred_count(&self) -> usize {
        self.sidebar.iter().filter(|g| g.is_deferred()).count()
    }
}

/// Resolve `config` into a manifest.
pub fn build_manifest(config: &SiteConfig) -> Result<NavigationManifest, ResolveError> {
    Ok(NavigationManifest {
        title: config.title.clone(),
        base_url: config.base_url.clone(),
        site: config.site.clone(),
        social: config.social.clone(),
        sidebar: resolve_sidebar(config)?,
    })
}

/// Write `manifest` as pretty JSON, creating parent directories.
pub fn write_manifest(manifest: &NavigationManifest, path: &Path) -> Result<(), ManifestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a manifest previously written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<NavigationManifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
