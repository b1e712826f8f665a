//! Markdown to HTML rendering.
//!
//! The renderer is an ordered sequence of rewrite passes over the whole
//! working string. Each pass rewrites all non-overlapping matches of one
//! recognizer from the pattern table before the next pass begins, and the
//! paragraph wrapper runs last. Passes never re-examine their own output
//! except where a later pass's pattern happens to match it; that ordering
//! hazard is part of the contract, not an accident to engineer away.
//!
//! - [`escape`]: pure HTML escaping used inside fenced code bodies
//! - [`patterns`]: the immutable table of named recognizers
//! - [`paragraph`]: the final wrapping pass

mod escape;
mod paragraph;
pub(crate) mod patterns;

pub use escape::escape_html;

/// Render markdown to HTML.
///
/// Applies the rewrite passes in their fixed order (headings, images,
/// links, code blocks, inline code, bold, italic, horizontal rules) and
/// wraps the remaining inline text in paragraphs. Total: malformed
/// constructs are left as literal text, never reported as errors.
///
/// # Examples
///
/// ```
/// use grist::render;
///
/// assert_eq!(render("# Hello"), "<h1>Hello</h1>");
/// assert_eq!(
///     render("Try the _new_ `build` flag"),
///     "<p>Try the <em>new</em> <code>build</code> flag</p>"
/// );
/// ```
pub fn render(markdown: &str) -> String {
    let mut html = markdown.to_string();
    for pass in patterns::passes() {
        html = pass.apply(&html);
    }
    paragraph::wrap(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_heading() {
        assert_eq!(render("# Hello"), "<h1>Hello</h1>");
    }

    #[test]
    fn test_heading_wraps_before_inline_passes() {
        assert_eq!(
            render("# **Bold** heading"),
            "<h1><strong>Bold</strong> heading</h1>"
        );
    }

    #[test]
    fn test_image_rewrites_before_link() {
        assert_eq!(
            render("see ![logo](logo.png) and [home](/) too"),
            r#"<p>see <img src="logo.png" alt="logo" /> and <a href="/">home</a> too</p>"#
        );
    }

    #[test]
    fn test_block_heuristic_spares_tag_bounded_inline_content() {
        // A block that happens to start and end with a tag is taken for a
        // rendered block element and skipped by the paragraph wrapper.
        assert_eq!(
            render("![logo](logo.png) and [home](/)"),
            r#"<img src="logo.png" alt="logo" /> and <a href="/">home</a>"#
        );
    }

    #[test]
    fn test_fenced_body_escaped_inline_body_not() {
        let fenced = render("```\n<script>alert(1)</script>\n```");
        assert_eq!(
            fenced,
            "<pre><code>&lt;script&gt;alert(1)&lt;/script&gt;</code></pre>"
        );

        let inline = render("`<script>alert(1)</script>`");
        assert_eq!(inline, "<code><script>alert(1)</script></code>");
    }

    #[test]
    fn test_horizontal_rule_not_rewrapped() {
        assert_eq!(render("---"), "<hr />");
        assert_eq!(render("before\n\n---\n\nafter"), "<p>before</p>\n\n<hr />\n\n<p>after</p>");
    }

    #[test]
    fn test_mixed_document() {
        let input = "# Title\n\nHello **world**.\n\n---\n\nBye.";
        assert_eq!(
            render(input),
            "<h1>Title</h1>\n\n<p>Hello <strong>world</strong>.</p>\n\n<hr />\n\n<p>Bye.</p>"
        );
    }

    #[test]
    fn test_heading_line_inside_fence_is_rewritten_first() {
        // The heading pass runs over the whole string before the fence is
        // consumed, so a `#` line inside a fence is already HTML (and then
        // escaped) by the time the code block pass captures the body.
        assert_eq!(
            render("```\n# not a heading\n```"),
            "<pre><code>&lt;h1&gt;not a heading&lt;/h1&gt;</code></pre>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(s in ".*") {
            prop_assert_eq!(render(&s), render(&s));
        }

        #[test]
        fn prop_render_is_total(s in "\\PC*") {
            // Never panics, whatever the input shape.
            let _ = render(&s);
        }
    }
}
