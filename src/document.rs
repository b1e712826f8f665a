//! Document assembly: frontmatter plus rendered content.

use crate::frontmatter::{Frontmatter, extract_frontmatter};
use crate::render::render;

/// A fully parsed document.
///
/// Holds the typed frontmatter mapping, the rendered HTML, and the raw
/// markdown remainder the HTML was rendered from. Owns all of its data;
/// parsing the same input twice yields two independent equal documents.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Document {
    /// Metadata from the leading frontmatter block, empty if absent.
    pub frontmatter: Frontmatter,
    /// The markdown remainder rendered to HTML.
    pub content: String,
    /// The markdown remainder itself, frontmatter stripped.
    pub raw_content: String,
}

/// Parse a complete document: extract frontmatter, render the rest.
///
/// Total: there is no failure case. Empty input produces the empty
/// document (`Document::default()`).
///
/// # Examples
///
/// ```
/// use grist::parse_document;
///
/// let doc = parse_document("---\ntitle: \"Hi\"\n---\n# Hi");
/// assert_eq!(doc.frontmatter["title"].as_str(), Some("Hi"));
/// assert_eq!(doc.content, "<h1>Hi</h1>");
/// assert_eq!(doc.raw_content, "# Hi");
/// ```
pub fn parse_document(input: &str) -> Document {
    let (frontmatter, remainder) = extract_frontmatter(input);
    Document {
        frontmatter,
        content: render(remainder),
        raw_content: remainder.to_string(),
    }
}
