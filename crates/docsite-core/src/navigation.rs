//! Navigation manifest.
//!
//! The manifest is authored by hand in the site configuration. It only decides
//! the order pages appear in; it never adds or hides pages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single entry in a navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    /// Link label shown in the sidebar.
    pub title: String,

    /// Site-relative path of the linked page.
    pub href: String,
}

/// A titled group of navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Group heading.
    pub title: String,

    /// Links in display order.
    #[serde(default)]
    pub links: Vec<NavigationLink>,
}

/// Ordered list of navigation groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationManifest {
    groups: Vec<NavigationGroup>,
}

impl NavigationManifest {
    /// Create a manifest from groups in display order.
    pub fn new(groups: Vec<NavigationGroup>) -> Self {
        Self { groups }
    }

    /// Build a single-group manifest from `(title, href)` pairs.
    pub fn from_links<'a>(
        group_title: &str,
        links: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::new(vec![NavigationGroup {
            title: group_title.to_string(),
            links: links
                .into_iter()
                .map(|(title, href)| NavigationLink {
                    title: title.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }])
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[NavigationGroup] {
        &self.groups
    }

    /// Whether the manifest lists no links at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.links.is_empty())
    }

    /// All hrefs, groups concatenated in declared order.
    pub fn flattened_hrefs(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.links.iter().map(|link| link.href.as_str()))
    }

    /// Map each href to its first position in [`Self::flattened_hrefs`].
    pub fn positions(&self) -> HashMap<&str, usize> {
        let mut positions = HashMap::new();
        for (index, href) in self.flattened_hrefs().enumerate() {
            positions.entry(href).or_insert(index);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> NavigationManifest {
        NavigationManifest::new(vec![
            NavigationGroup {
                title: "Introduction".to_string(),
                links: vec![
                    NavigationLink {
                        title: "Getting started".to_string(),
                        href: "/".to_string(),
                    },
                    NavigationLink {
                        title: "Installation".to_string(),
                        href: "/docs/installation".to_string(),
                    },
                ],
            },
            NavigationGroup {
                title: "Reference".to_string(),
                links: vec![
                    NavigationLink {
                        title: "Commands".to_string(),
                        href: "/docs/commands".to_string(),
                    },
                    NavigationLink {
                        title: "Installation again".to_string(),
                        href: "/docs/installation".to_string(),
                    },
                ],
            },
        ])
    }

    #[test]
    fn test_flattened_hrefs_follow_group_order() {
        let manifest = manifest();
        let hrefs: Vec<_> = manifest.flattened_hrefs().collect();
        assert_eq!(
            hrefs,
            vec!["/", "/docs/installation", "/docs/commands", "/docs/installation"]
        );
    }

    #[test]
    fn test_positions_keep_first_occurrence() {
        let manifest = manifest();
        let positions = manifest.positions();

        assert_eq!(positions.get("/"), Some(&0));
        assert_eq!(positions.get("/docs/installation"), Some(&1));
        assert_eq!(positions.get("/docs/commands"), Some(&2));
        assert_eq!(positions.get("/docs/nope"), None);
    }

    #[test]
    fn test_empty_manifest() {
        assert!(NavigationManifest::default().is_empty());
        assert!(!manifest().is_empty());
    }

    #[test]
    fn test_from_links() {
        let manifest = NavigationManifest::from_links("Docs", [("Home", "/"), ("Guide", "/guide")]);
        assert_eq!(manifest.groups().len(), 1);
        assert_eq!(manifest.groups()[0].links[1].href, "/guide");
    }
}
