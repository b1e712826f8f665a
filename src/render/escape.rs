//! HTML escaping for code block bodies.

/// Escape the five reserved HTML characters.
///
/// Maps `&`, `<`, `>`, `"`, and `'` to entities and leaves every other
/// character untouched. Total: never fails on any input.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
