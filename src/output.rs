//! CLI output formatting for resolved navigation.
//!
//! # Information-First Display
//!
//! Every group leads with its positional index and label; links follow as
//! indented `label → href` lines. Deferred groups show the directory the
//! site engine will enumerate instead of links. This makes the output read
//! as the sidebar a visitor will see, with the resolved targets alongside.
//!
//! # Output Format
//!
//! ```text
//! Angular - Zero to Hero
//!     Base: /angular-workshop-docs
//!
//! 001 Guides (2 links)
//!     001 Angular CLI → /angular-workshop-docs/guides/angular-cli/
//!     002 Angular Routing → /angular-workshop-docs/guides/routing/
//! 002 Reference (collapsed)
//!     Autogenerate: reference/
//!
//! Resolved 2 links in 1 group, 1 deferred group
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O; `print_*`
//! wrappers write them to stdout.

use crate::manifest::NavigationManifest;
use crate::sidebar::ResolvedGroup;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `"1 link"`, `"2 links"`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format a group header: positional index + label, with link count for
/// explicit groups and a marker when collapsed.
///
/// ```text
/// 001 Guides (5 links)
/// 002 Reference (collapsed)
/// ```
fn group_header(index: usize, group: &ResolvedGroup) -> String {
    let mut details = Vec::new();
    let collapsed = match group {
        ResolvedGroup::Links { items, collapsed, .. } => {
            details.push(plural(items.len(), "link"));
            *collapsed
        }
        ResolvedGroup::Deferred { collapsed, .. } => *collapsed,
    };
    if collapsed {
        details.push("collapsed".to_string());
    }
    if details.is_empty() {
        format!("{} {}", format_index(index), group.label())
    } else {
        format!(
            "{} {} ({})",
            format_index(index),
            group.label(),
            details.join(", ")
        )
    }
}

// ============================================================================
// Sidebar
// ============================================================================

/// Format the resolved sidebar tree with a site header and summary line.
pub fn format_sidebar(manifest: &NavigationManifest) -> Vec<String> {
    let mut lines = vec![manifest.title.clone()];
    if manifest.base_url.is_empty() {
        lines.push(format!("{}Base: (site root)", indent(1)));
    } else {
        lines.push(format!("{}Base: {}", indent(1), manifest.base_url));
    }
    if !manifest.site.is_empty() {
        lines.push(format!("{}Site: {}", indent(1), manifest.site));
    }
    for (platform, url) in &manifest.social {
        lines.push(format!("{}Social: {} \u{2192} {}", indent(1), platform, url));
    }
    lines.push(String::new());

    for (i, group) in manifest.sidebar.iter().enumerate() {
        lines.push(group_header(i + 1, group));
        match group {
            ResolvedGroup::Links { items, .. } => {
                for (j, link) in items.iter().enumerate() {
                    lines.push(format!(
                        "{}{} {} \u{2192} {}",
                        indent(1),
                        format_index(j + 1),
                        link.label,
                        link.href
                    ));
                }
            }
            ResolvedGroup::Deferred { directory, .. } => {
                lines.push(format!(
                    "{}Autogenerate: {}/",
                    indent(1),
                    directory.trim_end_matches('/')
                ));
            }
        }
    }

    if !manifest.sidebar.is_empty() {
        lines.push(String::new());
    }
    lines.push(format_summary(manifest));
    lines
}

/// One-line totals: links, explicit groups, deferred groups.
pub fn format_summary(manifest: &NavigationManifest) -> String {
    let deferred = manifest.deferred_count();
    let explicit = manifest.sidebar.len() - deferred;
    let mut summary = format!(
        "Resolved {} in {}",
        plural(manifest.link_count(), "link"),
        plural(explicit, "group")
    );
    if deferred > 0 {
        summary.push_str(&format!(", {}", plural(deferred, "deferred group")));
    }
    summary
}

/// Print the sidebar tree to stdout.
pub fn print_sidebar(manifest: &NavigationManifest) {
    for line in format_sidebar(manifest) {
        println!("{}", line);
    }
}

/// Print where the manifest was written.
pub fn print_written(path: &Path) {
    println!("Wrote {}", path.display());
}

// ============================================================================
// Tests
// ============================================================================
