//! Paragraph wrapping, the final pipeline pass.

use std::sync::LazyLock;

use regex_lite::Regex;

// One or more blank lines: a newline, optional whitespace, a newline.
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Wrap remaining inline text in `<p>` tags.
///
/// Splits on blank-line separators, drops empty blocks, and leaves blocks
/// that already look like a rendered block-level element (start with `<`
/// and end with `>`) unwrapped. Surviving blocks are joined with a blank
/// line.
pub(crate) fn wrap(text: &str) -> String {
    let blocks: Vec<String> = BLANK_LINES
        .split(text)
        .filter_map(|block| {
            let block = block.trim();
            if block.is_empty() {
                None
            } else if block.starts_with('<') && block.ends_with('>') {
                Some(block.to_string())
            } else {
                Some(format!("<p>{block}</p>"))
            }
        })
        .collect();
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_plain_text() {
        assert_eq!(wrap("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_splits_on_blank_lines() {
        assert_eq!(wrap("one\n\ntwo"), "<p>one</p>\n\n<p>two</p>");
        assert_eq!(wrap("one\n\n\n\ntwo"), "<p>one</p>\n\n<p>two</p>");
        assert_eq!(wrap("one\n   \ntwo"), "<p>one</p>\n\n<p>two</p>");
    }

    #[test]
    fn test_single_newline_stays_inside_paragraph() {
        assert_eq!(wrap("line one\nline two"), "<p>line one\nline two</p>");
    }

    #[test]
    fn test_rendered_blocks_left_unwrapped() {
        assert_eq!(wrap("<h1>Title</h1>"), "<h1>Title</h1>");
        assert_eq!(wrap("<hr />"), "<hr />");
        assert_eq!(
            wrap("<pre><code>x</code></pre>\n\ntext"),
            "<pre><code>x</code></pre>\n\n<p>text</p>"
        );
    }

    #[test]
    fn test_blocks_are_trimmed() {
        assert_eq!(wrap("  padded  \n\n  more  "), "<p>padded</p>\n\n<p>more</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(wrap(""), "");
        assert_eq!(wrap("\n\n\n"), "");
    }

    #[test]
    fn test_partial_tag_still_wrapped() {
        // Starts with `<` but does not end with `>`.
        assert_eq!(wrap("<em>oops"), "<p><em>oops</p>");
    }
}
