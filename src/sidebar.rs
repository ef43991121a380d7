//! Sidebar resolution: declarative groups → navigation the site engine renders.
//!
//! Every group is checked before anything is produced, so a bad config
//! fails without partial output. Explicit groups have each link passed
//! through [`resolve_link`]; autogenerated groups come out as
//! [`ResolvedGroup::Deferred`] and are left for the engine to enumerate.
//!
//! Declaration order is rendered order. Nothing here sorts, dedups, or
//! checks that a link points at a real page.

use crate::config::SiteConfig;
use crate::link::resolve_link;
use crate::types::{AutogenerateDirective, SidebarGroup, SidebarItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("sidebar group \"{label}\": {reason}")]
    InvalidGroup { label: String, reason: GroupViolation },
}

/// Ways a group can break the items/autogenerate exclusivity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupViolation {
    BothItemsAndAutogenerate,
    NeitherItemsNorAutogenerate,
}

impl fmt::Display for GroupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothItemsAndAutogenerate => {
                f.write_str("has both `items` and `autogenerate`; use one")
            }
            Self::NeitherItemsNorAutogenerate => {
                f.write_str("needs either `items` or `autogenerate`")
            }
        }
    }
}

/// A sidebar link after base-path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub label: String,
    pub href: String,
}

/// A sidebar group ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedGroup {
    /// Explicit links, already joined with the base path.
    Links {
        label: String,
        #[serde(default)]
        collapsed: bool,
        items: Vec<ResolvedLink>,
    },
    /// Left for the site engine to fill from `directory`.
    Deferred {
        label: String,
        #[serde(default)]
        collapsed: bool,
        directory: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subgroups_collapsed: Option<bool>,
    },
}

impl ResolvedGroup {
    pub fn label(&self) -> &str {
        match self {
            Self::Links { label, .. } | Self::Deferred { label, .. } => label,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }

    /// Resolved links; empty for deferred groups.
    pub fn items(&self) -> &[ResolvedLink] {
        match self {
            Self::Links { items, .. } => items,
            Self::Deferred { .. } => &[],
        }
    }
}

/// The two legal shapes of a [`SidebarGroup`].
enum GroupContent<'a> {
    Items(&'a [SidebarItem]),
    Autogenerate(&'a AutogenerateDirective),
}

/// Check the items/autogenerate exclusivity rule for one group.
pub fn validate_group(group: &SidebarGroup) -> Result<(), ResolveError> {
    group_content(group).map(|_| ())
}

fn group_content(group: &SidebarGroup) -> Result<GroupContent<'_>, ResolveError> {
    match (&group.items, &group.autogenerate) {
        (Some(items), None) => Ok(GroupContent::Items(items)),
        (None, Some(directive)) => Ok(GroupContent::Autogenerate(directive)),
        (Some(_), Some(_)) => Err(invalid(group, GroupViolation::BothItemsAndAutogenerate)),
        (None, None) => Err(invalid(group, GroupViolation::NeitherItemsNorAutogenerate)),
    }
}

fn invalid(group: &SidebarGroup, reason: GroupViolation) -> ResolveError {
    ResolveError::InvalidGroup {
        label: group.label.clone(),
        reason,
    }
}

/// Resolve the sidebar of `config` against its base path.
pub fn resolve_sidebar(config: &SiteConfig) -> Result<Vec<ResolvedGroup>, ResolveError> {
    resolve_groups(&config.base_url, &config.sidebar)
}

/// Resolve `groups` against `base_url`.
///
/// Fails on the first group (in declaration order) that breaks the
/// exclusivity rule, before any group is resolved.
pub fn resolve_groups(
    base_url: &str,
    groups: &[SidebarGroup],
) -> Result<Vec<ResolvedGroup>, ResolveError> {
    let contents = groups
        .iter()
        .map(group_content)
        .collect::<Result<Vec<_>, _>>()?;

    let resolved = groups
        .iter()
        .zip(contents)
        .map(|(group, content)| match content {
            GroupContent::Items(items) => {
                debug!(group = %group.label, items = items.len(), "resolving sidebar group");
                ResolvedGroup::Links {
                    label: group.label.clone(),
                    collapsed: group.collapsed,
                    items: items
                        .iter()
                        .map(|item| ResolvedLink {
                            label: item.label.clone(),
                            href: resolve_link(base_url, &item.link),
                        })
                        .collect(),
                }
            }
            GroupContent::Autogenerate(directive) => {
                debug!(
                    group = %group.label,
                    directory = %directive.directory,
                    "deferring autogenerated sidebar group"
                );
                ResolvedGroup::Deferred {
                    label: group.label.clone(),
                    collapsed: group.collapsed,
                    directory: directive.directory.clone(),
                    subgroups_collapsed: directive.collapsed,
                }
            }
        })
        .collect();

    Ok(resolved)
}
