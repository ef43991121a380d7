//! Declarative sidebar types as they appear in `docnav.toml`.
//!
//! These mirror the config file one-to-one. A group is written either with
//! an `items` list or with an `autogenerate` table:
//!
//! ```toml
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
//! Both fields are optional at the serde level so that a group carrying
//! both, or neither, still parses and can be reported by label in
//! [`crate::sidebar::resolve_sidebar`] instead of failing as an opaque
//! TOML error.

use serde::{Deserialize, Serialize};

/// A labeled section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Heading shown above the group's links.
    pub label: String,
    /// Explicit links, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SidebarItem>>,
    /// Directory the site engine enumerates to produce this group's links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autogenerate: Option<AutogenerateDirective>,
    /// Render the group folded by default.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
}

/// One entry in an explicit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarItem {
    pub label: String,
    /// Path fragment, optionally containing a single `{base}` placeholder.
    pub link: String,
}

/// Deferred group contents, expanded by the site engine at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogenerateDirective {
    pub directory: String,
    /// Collapse state for nested groups the engine derives from subdirectories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarGroup {
    /// An explicit group with the given `(label, link)` pairs.
    pub fn with_items<I, L, K>(label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = (L, K)>,
        L: Into<String>,
        K: Into<String>,
    {
        Self {
            label: label.into(),
            items: Some(
                items
                    .into_iter()
                    .map(|(label, link)| SidebarItem {
                        label: label.into(),
                        link: link.into(),
                    })
                    .collect(),
            ),
            autogenerate: None,
            collapsed: false,
        }
    }

    /// A group whose links come from `directory`.
    pub fn autogenerated(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: None,
            autogenerate: Some(AutogenerateDirective {
                directory: directory.into(),
                collapsed: None,
            }),
            collapsed: false,
        }
    }
}
