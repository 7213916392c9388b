//! Markdoc tag stripping for plain-text output.
//!
//! Removes `{% ... %}` annotations and keeps the prose around them. Code
//! samples that contain a literal `{% ... %}` sequence are stripped as well.

use std::sync::LazyLock;

use regex::Regex;

/// `{% tag attr="x" /%}`
static SELF_CLOSING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*\w[\w-]*\s[^%]*/%\}").unwrap());

/// `{% tag attr="x" %}` and `{% /tag %}`
static OPEN_OR_CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*/?\s*[\w-]+(?:\s[^%]*)?\s*%\}").unwrap());

/// `{% .lead %}`
static ATTRIBUTE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*\.[^%]*%\}").unwrap());

static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip Markdoc tags from `content`.
///
/// Runs of three or more newlines left behind collapse to one blank line and
/// the result is trimmed. `strip_tags(&strip_tags(s)) == strip_tags(s)`.
pub fn strip_tags(content: &str) -> String {
    let mut current = content.to_string();

    // A removal can join the halves of an enclosing tag; repeat until stable.
    loop {
        let next = remove_tags_once(&current);
        if next == current {
            break;
        }
        current = next;
    }

    BLANK_LINE_RUN
        .replace_all(&current, "\n\n")
        .trim()
        .to_string()
}

fn remove_tags_once(content: &str) -> String {
    let content = SELF_CLOSING_TAG.replace_all(content, "");
    let content = OPEN_OR_CLOSE_TAG.replace_all(&content, "");
    ATTRIBUTE_ANNOTATION.replace_all(&content, "").into_owned()
}
