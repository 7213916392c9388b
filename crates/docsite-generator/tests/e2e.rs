//! End-to-end tests for the docsite pipeline.
//!
//! These tests exercise the repository's own documentation tree as well as
//! small throwaway trees built in temporary directories.

use std::{fs, path::Path};

use docsite_core::{Config, NavigationManifest, config::ContentConfig};
use docsite_generator::{LinkChecker, LlmsGenerator, PageIndex, SitemapGenerator, strip_tags};

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, text).expect("write");
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::from_toml_str(
        r#"
[site]
title = "Nestled"
base_url = "https://nestledjs.com"
description = "A SaaS starter."

[[navigation]]
title = "Documentation"
links = [
    { title = "Getting started", href = "/" },
    { title = "Installation", href = "/docs/installation" },
    { title = "Commands", href = "/docs/commands" },
]
"#,
    )
    .expect("parse config");
    config.content.root = root.to_path_buf();
    config
}

/// Load the repository's own site, rooted relative to the workspace.
fn repository_site() -> Option<Config> {
    let workspace = Path::new("../..");
    let config_path = workspace.join("docsite.toml");
    if !config_path.exists() {
        return None;
    }

    let mut config = Config::load(&config_path).expect("Config should load");
    config.content.root = workspace.join(&config.content.root);
    Some(config)
}

#[test]
fn test_repository_site_links_resolve() {
    let Some(config) = repository_site() else {
        return;
    };

    let report = LinkChecker::new(&config.content).check().expect("check");
    assert!(report.is_ok(), "broken links: {:?}", report.broken);
    assert!(report.links > 0);
}

#[test]
fn test_repository_site_follows_navigation() {
    let Some(config) = repository_site() else {
        return;
    };

    let pages = PageIndex::from_config(&config).pages().expect("pages");
    let listed: Vec<_> = config.navigation.flattened_hrefs().collect();

    assert!(!pages.is_empty());
    assert_eq!(pages[0].href, "/");
    for (page, href) in pages.iter().zip(&listed) {
        assert_eq!(page.href, *href);
    }
    assert!(pages.iter().all(|page| !page.title.is_empty()));
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(
        dir.path(),
        "page.md",
        "---\ntitle: Getting started\n---\n\nBuild faster. {% .lead %}\n\n{% quick-links %}\n\n\
         {% quick-link title=\"Installation\" href=\"/docs/installation\" /%}\n\n\
         {% /quick-links %}\n",
    );
    write(
        dir.path(),
        "docs/installation/page.md",
        "---\ntitle: Installation\n---\n\nSee [commands](/docs/commands/).\n",
    );
    write(
        dir.path(),
        "docs/commands/page.md",
        "---\ntitle: Commands\n---\n\n\
         {% callout title=\"Note\" %}\nRun from the repo root.\n{% /callout %}\n",
    );
    write(dir.path(), "docs/zzz/page.md", "---\ntitle: Appendix\n---\nLast.");

    let config = config_for(dir.path());
    let pages = PageIndex::from_config(&config).pages().expect("pages");
    let hrefs: Vec<_> = pages.iter().map(|p| p.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/", "/docs/installation", "/docs/commands", "/docs/zzz"]);

    let llms = LlmsGenerator::new(config.site.clone());
    let digest = llms.digest(&pages);
    assert!(digest.contains(
        "- [Getting started](https://nestledjs.com/)\n\
         - [Installation](https://nestledjs.com/docs/installation)\n\
         - [Commands](https://nestledjs.com/docs/commands)\n\
         - [Appendix](https://nestledjs.com/docs/zzz)\n"
    ));

    let full = llms.full_text(&pages);
    assert!(!full.contains("{%"));
    assert!(full.contains(
        "## Commands\n\nSource: https://nestledjs.com/docs/commands\n\nRun from the repo root."
    ));
    assert!(full.ends_with("## Appendix\n\nSource: https://nestledjs.com/docs/zzz\n\nLast."));

    let sitemap = SitemapGenerator::new(&config.sitemap).generate(&pages);
    assert_eq!(sitemap.matches("<url>").count(), 4);

    let report = LinkChecker::new(&config.content).check().expect("check");
    assert!(report.is_ok());
    assert_eq!(report.links, 2);
}

#[test]
fn test_rescan_is_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "page.md", "---\ntitle: Home\n---\nHome");
    write(dir.path(), "b/page.md", "B");
    write(dir.path(), "a/page.md", "A");

    let index = PageIndex::from_config(&config_for(dir.path()));
    assert_eq!(index.pages().expect("first"), index.pages().expect("second"));
}

#[test]
fn test_empty_tree() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = config_for(dir.path());

    let pages = PageIndex::from_config(&config).pages().expect("pages");
    assert!(pages.is_empty());

    let llms = LlmsGenerator::new(config.site.clone());
    assert!(llms.digest(&pages).contains("## Docs\n\n## Optional"));
    assert_eq!(
        llms.full_text(&pages),
        "# Nestled - Full Documentation\n\n\n> A SaaS starter.\n"
    );

    let sitemap = SitemapGenerator::new(&config.sitemap).generate(&pages);
    assert!(!sitemap.contains("<url>"));

    let report = LinkChecker::new(&config.content).check().expect("check");
    assert!(report.is_ok());
    assert_eq!(report.routes, 0);
}

#[test]
fn test_broken_link_scenario() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(
        dir.path(),
        "page.md",
        "[Installation](/docs/installation)\n[Missing](/docs/nope)\n",
    );
    write(dir.path(), "docs/installation/page.md", "Install");

    let content = ContentConfig {
        root: dir.path().to_path_buf(),
        ..ContentConfig::default()
    };
    let report = LinkChecker::new(&content).check().expect("check");

    assert_eq!(report.broken.len(), 1);
    assert_eq!(report.broken[0].link, "/docs/nope");
}

#[test]
fn test_navigation_injected_explicitly() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "page.md", "Home");
    write(dir.path(), "alpha/page.md", "Alpha");
    write(dir.path(), "omega/page.md", "Omega");

    let config = config_for(dir.path());
    let navigation = NavigationManifest::from_links("Docs", [("Omega", "/omega")]);
    let pages = PageIndex::new(config.site.clone(), &config.content, navigation)
        .pages()
        .expect("pages");

    let hrefs: Vec<_> = pages.iter().map(|p| p.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/omega", "/", "/alpha"]);
}

#[test]
fn test_strip_tags_idempotent_on_page_bodies() {
    let body = "{% callout %}\n\n\n\nText {% .lead %}\n\n\n{% /callout %}\n";
    let once = strip_tags(body);
    assert_eq!(strip_tags(&once), once);
}
