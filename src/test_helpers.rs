//! Shared test utilities for the docnav test suite.
//!
//! Provides fixture setup, lookup helpers and sidebar shape assertions for
//! resolved navigation (`ResolvedGroup`, `ResolvedLink`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixture("workshop");
//! let config = load_config(tmp.path()).unwrap();
//! let sidebar = resolve_sidebar(&config).unwrap();
//!
//! let guides = find_group(&sidebar, "Guides");
//! assert_eq!(find_link(guides, "Angular CLI").href, "guides/angular-cli/");
//!
//! assert_sidebar_shape(&sidebar, &[
//!     ("Guides", &["Angular CLI", "Set up Tailwind CSS"]),
//!     ("Reference", &[]),
//! ]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;

use crate::config::{CONFIG_FILE_NAME, SiteConfig};
use crate::sidebar::{ResolvedGroup, ResolvedLink};
use crate::types::SidebarGroup;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/<name>/` to a temp directory and return it.
pub fn setup_fixture(name: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    for entry in std::fs::read_dir(&fixture).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Write `content` as `docnav.toml` into a fresh temp directory.
pub fn write_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(CONFIG_FILE_NAME), content).unwrap();
    tmp
}

/// The workshop site from `fixtures/workshop/`, built in code.
pub fn workshop_config(base_url: &str) -> SiteConfig {
    SiteConfig {
        title: "Angular - Zero to Hero".to_string(),
        base_url: base_url.to_string(),
        site: String::new(),
        social: BTreeMap::from([(
            "github".to_string(),
            "https://github.com/withastro/starlight".to_string(),
        )]),
        sidebar: vec![
            SidebarGroup::with_items(
                "Guides",
                [
                    ("Angular CLI", "guides/angular-cli/"),
                    ("Set up Tailwind CSS", "guides/tailwind-css/"),
                    ("Angular Routing", "guides/routing/"),
                    ("API calls in Angular", "guides/api-calls-in-angular/"),
                    ("Angular Signals", "guides/angular-signals/"),
                ],
            ),
            SidebarGroup::autogenerated("Reference", "reference"),
        ],
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Group labels in order.
pub fn group_labels(sidebar: &[ResolvedGroup]) -> Vec<&str> {
    sidebar.iter().map(ResolvedGroup::label).collect()
}

/// Link labels of a group in order.
pub fn link_labels(group: &ResolvedGroup) -> Vec<&str> {
    group.items().iter().map(|l| l.label.as_str()).collect()
}

/// Find a group by label. Panics if not found.
pub fn find_group<'a>(sidebar: &'a [ResolvedGroup], label: &str) -> &'a ResolvedGroup {
    sidebar
        .iter()
        .find(|g| g.label() == label)
        .unwrap_or_else(|| {
            let labels = group_labels(sidebar);
            panic!("group '{label}' not found. Available: {labels:?}")
        })
}

/// Find a link by label within a group. Panics if not found.
pub fn find_link<'a>(group: &'a ResolvedGroup, label: &str) -> &'a ResolvedLink {
    group
        .items()
        .iter()
        .find(|l| l.label == label)
        .unwrap_or_else(|| {
            let labels = link_labels(group);
            panic!(
                "link '{label}' not found in group '{}'. Available: {labels:?}",
                group.label()
            )
        })
}

/// Assert the sidebar matches an expected shape.
///
/// Each entry is `(group label, link labels)`. Use `&[]` for deferred
/// groups and explicit groups with no items.
pub fn assert_sidebar_shape(sidebar: &[ResolvedGroup], expected: &[(&str, &[&str])]) {
    let expected_labels: Vec<&str> = expected.iter().map(|(l, _)| *l).collect();
    assert_eq!(group_labels(sidebar), expected_labels, "group labels mismatch");

    for (group, (label, links)) in sidebar.iter().zip(expected) {
        assert_eq!(
            link_labels(group),
            links.to_vec(),
            "links of group '{label}' mismatch"
        );
    }
}
