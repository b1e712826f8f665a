//! URL-safe slug generation.
//!
//! Derives lowercase, hyphen-delimited identifiers from arbitrary text,
//! suitable for URLs and HTML anchors.

/// Derive a URL-safe slug from text.
///
/// Lowercases the input, drops every character that is not an ASCII
/// letter, digit, underscore, whitespace, or hyphen, then collapses each
/// run of whitespace, underscores, and hyphens into a single hyphen.
/// Leading and trailing hyphens are stripped.
///
/// # Examples
///
/// ```
/// use grist::slugify;
///
/// assert_eq!(slugify("Hello, World! 2025"), "hello-world-2025");
/// assert_eq!(slugify("  --multiple---hyphens--  "), "multiple-hyphens");
/// assert_eq!(slugify("snake_case_name"), "snake-case-name");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_')
            && !slug.is_empty()
            && !slug.ends_with('-')
        {
            slug.push('-');
        }
        // Everything else is dropped.
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
