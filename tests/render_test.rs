//! Full-pipeline rendering tests over a realistic document.

use grist::{FrontmatterValue, parse_document, render};

const POST: &str = include_str!("fixtures/post.md");

#[test]
fn test_fixture_frontmatter() {
    let doc = parse_document(POST);

    assert_eq!(doc.frontmatter.len(), 5);
    assert_eq!(
        doc.frontmatter["title"].as_str(),
        Some("Shipping the Static Site")
    );
    assert_eq!(doc.frontmatter["date"].as_str(), Some("2025-11-02"));
    assert_eq!(doc.frontmatter["draft"].as_bool(), Some(false));
    assert_eq!(doc.frontmatter["rating"].as_number(), Some(4.5));
    assert_eq!(
        doc.frontmatter["tags"],
        FrontmatterValue::List(vec![
            "rust".to_string(),
            "markdown".to_string(),
            "tooling".to_string()
        ])
    );
}

#[test]
fn test_fixture_block_elements() {
    let doc = parse_document(POST);

    assert!(doc.content.contains("<h1>Shipping the Static Site</h1>"));
    assert!(doc.content.contains("<h2>Before</h2>"));
    assert!(doc.content.contains("<h2>After</h2>"));
    assert!(doc.content.contains("<hr />"));
    assert!(
        doc.content
            .contains("<pre><code class=\"language-sh\">pandoc --from markdown --to html5 page.md</code></pre>")
    );
}

#[test]
fn test_fixture_inline_elements() {
    let doc = parse_document(POST);

    assert!(doc.content.contains("<strong>why it matters</strong>"));
    assert!(doc.content.contains("<em>typed</em>"));
    assert!(doc.content.contains("<code>sed</code>"));
    assert!(
        doc.content
            .contains(r#"<a href="/notes/build-rewrite">migration notes</a>"#)
    );
    assert!(
        doc.content
            .contains(r#"<img src="/img/build-times.png" alt="build time chart" />"#)
    );
}

#[test]
fn test_fixture_code_body_is_escaped() {
    let doc = parse_document(POST);

    assert!(doc.content.contains("parse_document(&amp;source)"));
    assert!(!doc.content.contains("parse_document(&source)"));
}

#[test]
fn test_fixture_paragraphs() {
    let doc = parse_document(POST);

    assert!(
        doc.content
            .contains("<p>Cold builds took four minutes. Incremental builds were not a thing.</p>")
    );
    assert!(doc.content.ends_with("<p>Cold builds now finish in nine seconds.</p>"));
    // Already rendered blocks are never re-wrapped.
    assert!(!doc.content.contains("<p><h"));
    assert!(!doc.content.contains("<p><pre>"));
    assert!(!doc.content.contains("<p><hr />"));
}

#[test]
fn test_render_skips_frontmatter_handling() {
    // The bare renderer treats delimiter lines as horizontal rules, and
    // the rule-bounded first block trips the block heuristic.
    let html = render("---\ntitle: x\n---\n\nBody.");
    assert_eq!(html, "<hr />\ntitle: x\n<hr />\n\n<p>Body.</p>");
}

#[test]
fn test_trailing_double_space_is_not_a_break() {
    assert_eq!(render("one  \ntwo"), "<p>one  \ntwo</p>");
}
