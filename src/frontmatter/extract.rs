//! Frontmatter block extraction and line parsing.

use std::collections::BTreeMap;

use crate::render::patterns;

use super::value::FrontmatterValue;

/// Parsed frontmatter: a key-ordered mapping of typed values.
pub type Frontmatter = BTreeMap<String, FrontmatterValue>;

/// Split a document into its frontmatter mapping and markdown remainder.
///
/// A frontmatter block is recognized only when the document begins with a
/// line of exactly `---`, followed by zero or more lines and a closing
/// `---` line. Without one, the mapping is empty and the document comes
/// back unchanged. With one, the remainder is the text after the closing
/// delimiter with surrounding whitespace trimmed.
///
/// Block lines parse independently: the text before the first colon is
/// the key, the text after it the raw value, both trimmed. Lines without
/// a colon are dropped. When a key repeats, the last line wins.
///
/// # Examples
///
/// ```
/// use grist::extract_frontmatter;
///
/// let (meta, rest) = extract_frontmatter("---\ndraft: true\n---\n# Post");
/// assert_eq!(meta["draft"].as_bool(), Some(true));
/// assert_eq!(rest, "# Post");
///
/// let (meta, rest) = extract_frontmatter("no block here");
/// assert!(meta.is_empty());
/// assert_eq!(rest, "no block here");
/// ```
pub fn extract_frontmatter(document: &str) -> (Frontmatter, &str) {
    let Some(caps) = patterns::lookup("frontmatter-block").captures(document) else {
        return (Frontmatter::new(), document);
    };

    let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
    let remainder = document[end..].trim();

    let mut metadata = Frontmatter::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        metadata.insert(key.trim().to_string(), FrontmatterValue::coerce(value));
    }

    (metadata, remainder)
}
