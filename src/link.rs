//! Base-path link resolution.
//!
//! A documentation site served from a sub-path (`https://host/my-docs/`)
//! needs every site-relative sidebar link prefixed with that path. Config
//! files in the wild are inconsistent about this: some links already carry
//! the prefix, some use a `{base}` placeholder, some leave it out. This
//! module folds all of those into one result.
//!
//! ## Rules
//!
//! | base          | link                  | href                       |
//! |---------------|-----------------------|----------------------------|
//! | `""`          | `guides/cli/`         | `guides/cli/`              |
//! | `/docs`       | `guides/cli/`         | `/docs/guides/cli/`        |
//! | `/docs`       | `/guides//cli/`       | `/docs/guides/cli/`        |
//! | `/docs`       | `/docs/guides/cli/`   | `/docs/guides/cli/`        |
//! | `/docs`       | `docs/guides/cli/`    | `/docs/docs/guides/cli/`   |
//! | `/docs`       | `//guides/cli/`       | `/docs/guides/cli/`        |
//! | `/docs`       | `{base}/guides/cli/`  | `/docs/guides/cli/`        |
//! | `""`          | `{base}/guides/cli/`  | `/guides/cli/`             |
//! | `/docs`       | `https://example.com` | `https://example.com`      |
//!
//! A link counts as already prefixed only when it starts with the base path
//! itself, leading slash included. The base is compared and joined with its
//! own slash runs collapsed. With an empty base a placeholder-free link is returned byte for byte,
//! malformed or not. Resolution is idempotent: feeding an href back in with
//! the same base returns it unchanged.

/// Token marking where the base path belongs inside a link template.
pub const BASE_PLACEHOLDER: &str = "{base}";

/// Schemes recognised without a `//` authority.
const OPAQUE_SCHEMES: &[&str] = &["mailto", "tel", "sms", "data"];

/// Join `base_url` and `link_template` into a final href.
///
/// Never fails: odd slashes are normalized rather than rejected.
pub fn resolve_link(base_url: &str, link_template: &str) -> String {
    if is_external(link_template) {
        return link_template.to_string();
    }

    let base = collapse_slashes(base_url);
    let base = base.trim_end_matches('/');

    if let Some(rest) = expand_placeholder(link_template) {
        // The placeholder marks the join point; never treated as already prefixed.
        let rest = collapse_slashes(rest.trim_start_matches('/'));
        return format!("{base}/{rest}");
    }

    if base.is_empty() {
        return link_template.to_string();
    }

    let collapsed = collapse_slashes(link_template);
    let rest = strip_base(&collapsed, base).unwrap_or(collapsed.as_str());

    format!("{base}/{}", rest.trim_start_matches('/'))
}

/// Whether `link` points off-site and must never be prefixed.
///
/// Covers `scheme://` URLs, `mailto:`/`tel:` style links, protocol-relative
/// `//host.tld` links and bare `#fragment` anchors. A `//` link whose first
/// segment has no dot is a site path with a doubled slash.
pub fn is_external(link: &str) -> bool {
    if link.starts_with('#') {
        return true;
    }
    if let Some(authority) = link.strip_prefix("//") {
        let host = authority.split('/').next().unwrap_or_default();
        return host.contains('.');
    }
    let Some((scheme, rest)) = link.split_once(':') else {
        return false;
    };
    let well_formed = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed
        && (rest.starts_with("//")
            || OPAQUE_SCHEMES
                .iter()
                .any(|known| scheme.eq_ignore_ascii_case(known)))
}

/// Replace the first `{base}` with a separator, if present.
fn expand_placeholder(template: &str) -> Option<String> {
    template
        .contains(BASE_PLACEHOLDER)
        .then(|| template.replacen(BASE_PLACEHOLDER, "/", 1))
}

/// If `link` already starts with `base` on a segment boundary, return what
/// follows it.
fn strip_base<'a>(link: &'a str, base: &str) -> Option<&'a str> {
    let rest = link.strip_prefix(base)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

/// Collapse runs of `/` into one.
fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}
