//! Frontmatter extraction for page sources.
//!
//! A page may start with a metadata block fenced by [`FRONTMATTER_MARKER`]
//! lines. Only the `title` key is read; the block is scanned line by line
//! rather than parsed as YAML, so unknown keys and values that are not valid
//! YAML never cause a failure.

use std::path::Path;

use tracing::debug;

/// Fence line that opens and closes a frontmatter block.
pub const FRONTMATTER_MARKER: &str = "---";

/// Metadata declared in a page's frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Page title, empty when the block has no `title:` line.
    pub title: String,
}

impl Frontmatter {
    /// Read the metadata keys this site uses out of a raw frontmatter block.
    pub fn from_block(block: &str) -> Self {
        let title = block
            .lines()
            .find_map(|line| line.strip_prefix("title:"))
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        Self { title }
    }
}

/// Split raw source text into its frontmatter block and body.
///
/// Returns `None` when the text does not open with a marker line or the
/// marker is never closed.
pub fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(FRONTMATTER_MARKER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == FRONTMATTER_MARKER {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

/// Parse the frontmatter of a page source.
///
/// Text without a complete frontmatter block yields an empty title and the
/// whole input as body.
pub fn parse_frontmatter(raw: &str, path: &Path) -> (Frontmatter, String) {
    match split_frontmatter(raw) {
        Some((block, body)) => (Frontmatter::from_block(block), body.to_string()),
        None => {
            if raw.starts_with(FRONTMATTER_MARKER) {
                debug!(path = %path.display(), "unterminated frontmatter, treating file as body");
            }
            (Frontmatter::default(), raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_body() {
        let raw = "---\ntitle: T\n---\nBODY";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert_eq!(fm.title, "T");
        assert_eq!(body, "BODY");
    }

    #[test]
    fn test_title_is_trimmed_and_other_keys_ignored() {
        let raw = concat!(
            "---\n",
            "nextjs:\n",
            "  metadata:\n",
            "    title: Nested\n",
            "title:   Installation  \n",
            "description: How to install\n",
            "---\n",
            "\n",
            "Install it.\n",
        );
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert_eq!(fm.title, "Installation");
        assert_eq!(body, "\nInstall it.\n");
    }

    #[test]
    fn test_block_without_title() {
        let raw = "---\ndescription: nothing else\n---\nBody";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert!(fm.title.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let raw = "# Heading\n\nJust content.";
        assert!(split_frontmatter(raw).is_none());

        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));
        assert!(fm.title.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_marker_must_open_the_file() {
        let raw = "\n---\ntitle: Late\n---\nBody";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert!(fm.title.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_unterminated_block_degrades_to_body() {
        let raw = "---\ntitle: Broken\nno closing marker";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert!(fm.title.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_empty_body_after_block() {
        let raw = "---\ntitle: Only Title\n---\n";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert_eq!(fm.title, "Only Title");
        assert!(body.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert_eq!(fm.title, "Windows");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_body_may_contain_horizontal_rules() {
        let raw = "---\ntitle: Rules\n---\nabove\n\n---\n\nbelow";
        let (fm, body) = parse_frontmatter(raw, Path::new("page.md"));

        assert_eq!(fm.title, "Rules");
        assert_eq!(body, "above\n\n---\n\nbelow");
    }
}
