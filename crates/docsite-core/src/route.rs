//! Route and URL derivation.
//!
//! A page's route is the directory holding its source file, relative to the
//! content root: `page.md` is `/`, `docs/installation/page.md` is
//! `/docs/installation`.

use std::path::{Component, Path};

/// The root route.
pub const ROOT_HREF: &str = "/";

/// Derive the site-relative href for a page file path relative to the content root.
pub fn href_for(relative_path: &Path) -> String {
    let parent = relative_path.parent().unwrap_or(Path::new(""));
    let segments: Vec<_> = parent
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        ROOT_HREF.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Join a site origin and an href into an absolute URL.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), href)
}

/// Normalize a link target for route comparison.
///
/// A single trailing slash is dropped unless the target is the root.
pub fn normalize_route(target: &str) -> &str {
    if target == ROOT_HREF {
        return target;
    }
    target.strip_suffix('/').unwrap_or(target)
}

/// Number of non-empty path segments in an href; the root has depth 0.
pub fn depth(href: &str) -> usize {
    href.split('/').filter(|segment| !segment.is_empty()).count()
}
