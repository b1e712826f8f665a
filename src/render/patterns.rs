//! The pattern table: one named recognizer per markdown construct.
//!
//! Every recognizer pairs a compiled pattern with a replacement function.
//! The table is process-wide and immutable; declaration order is
//! independent of the order the pipeline applies the passes in, which is
//! fixed by [`passes`].

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use super::escape::escape_html;

/// A named rewrite rule: a match pattern plus its replacement.
pub(crate) struct Pattern {
    pub(crate) name: &'static str,
    regex: &'static LazyLock<Regex>,
    replace: fn(&Captures<'_>) -> String,
}

impl Pattern {
    /// Rewrite all non-overlapping matches in `input`, left to right.
    pub(crate) fn apply(&self, input: &str) -> String {
        self.regex
            .replace_all(input, |caps: &Captures<'_>| (self.replace)(caps))
            .into_owned()
    }

    /// Match `input` against this pattern and return the captures.
    pub(crate) fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(input)
    }
}

// ============================================================================
// Match rules
// ============================================================================

// A frontmatter block is only recognized at the very start of the document:
// a line of exactly `---`, any lines, a closing line of exactly `---`.
static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)\A---\n(.*?)^---$\n?").unwrap());

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) +(.+)$").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

// Single underscores, non-greedy, within one line. Matches inside
// snake_case identifiers too; there is no word-boundary guard.
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

// Fenced block: optional language tag before the first newline, body up to
// the closing fence (non-greedy, spans newlines).
static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n?(.*?)```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m) {2}$").unwrap());

static HORIZONTAL_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-{3,}$").unwrap());

// ============================================================================
// Replacement rules
// ============================================================================

fn strip(_caps: &Captures<'_>) -> String {
    String::new()
}

fn heading(caps: &Captures<'_>) -> String {
    let level = caps[1].len();
    format!("<h{level}>{}</h{level}>", caps[2].trim())
}

fn bold(caps: &Captures<'_>) -> String {
    format!("<strong>{}</strong>", &caps[1])
}

fn italic(caps: &Captures<'_>) -> String {
    format!("<em>{}</em>", &caps[1])
}

fn link(caps: &Captures<'_>) -> String {
    format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
}

fn image(caps: &Captures<'_>) -> String {
    format!(r#"<img src="{}" alt="{}" />"#, &caps[2], &caps[1])
}

fn code_block(caps: &Captures<'_>) -> String {
    let body = escape_html(caps[2].trim());
    let lang = &caps[1];
    if lang.is_empty() {
        format!("<pre><code>{body}</code></pre>")
    } else {
        format!(r#"<pre><code class="language-{lang}">{body}</code></pre>"#)
    }
}

// Inline code is emitted without HTML escaping. Fenced blocks escape
// their bodies; inline spans do not.
fn inline_code(caps: &Captures<'_>) -> String {
    format!("<code>{}</code>", &caps[1])
}

fn line_break(_caps: &Captures<'_>) -> String {
    "<br />".to_string()
}

fn horizontal_rule(_caps: &Captures<'_>) -> String {
    "<hr />".to_string()
}

// ============================================================================
// The table and the pass order
// ============================================================================

/// Every recognizer the renderer knows about, by name.
///
/// The `line-break` entry is declared for completeness but is not part of
/// the pipeline's pass sequence.
pub(crate) static PATTERN_TABLE: [Pattern; 10] = [
    Pattern { name: "frontmatter-block", regex: &FRONTMATTER_RE, replace: strip },
    Pattern { name: "heading", regex: &HEADING_RE, replace: heading },
    Pattern { name: "bold", regex: &BOLD_RE, replace: bold },
    Pattern { name: "italic", regex: &ITALIC_RE, replace: italic },
    Pattern { name: "link", regex: &LINK_RE, replace: link },
    Pattern { name: "image", regex: &IMAGE_RE, replace: image },
    Pattern { name: "code-block", regex: &CODE_BLOCK_RE, replace: code_block },
    Pattern { name: "inline-code", regex: &INLINE_CODE_RE, replace: inline_code },
    Pattern { name: "line-break", regex: &LINE_BREAK_RE, replace: line_break },
    Pattern { name: "horizontal-rule", regex: &HORIZONTAL_RULE_RE, replace: horizontal_rule },
];

// Images rewrite before links so the link rule cannot capture the `!`
// form. Code blocks rewrite before inline code so fence interiors are
// consumed before single backticks are considered.
const PASS_ORDER: [&str; 8] = [
    "heading",
    "image",
    "link",
    "code-block",
    "inline-code",
    "bold",
    "italic",
    "horizontal-rule",
];

/// Look up a table entry by name.
pub(crate) fn lookup(name: &str) -> &'static Pattern {
    PATTERN_TABLE
        .iter()
        .find(|pattern| pattern.name == name)
        .expect("pattern name resolves to a table entry")
}

/// The rewrite passes in application order.
pub(crate) fn passes() -> impl Iterator<Item = &'static Pattern> {
    PASS_ORDER.iter().map(|name| lookup(name))
}
