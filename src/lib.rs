//! # grist
//!
//! A small, fast library for turning author-written markdown into HTML,
//! with frontmatter extraction and slug generation.
//!
//! ## Features
//!
//! - Render a constrained markdown subset to HTML (headings, emphasis,
//!   links, images, fenced and inline code, horizontal rules, paragraphs)
//! - Extract a leading `---` frontmatter block into typed key-value data
//! - Derive URL-safe slugs from arbitrary text
//! - Total functions: malformed input degrades to literal text, never errors
//!
//! ## Quick Start
//!
//! ```
//! use grist::{parse_document, render, slugify};
//!
//! let doc = parse_document("---\ntitle: \"My Post\"\n---\n# Hi");
//! assert_eq!(doc.frontmatter["title"].as_str(), Some("My Post"));
//! assert_eq!(doc.content, "<h1>Hi</h1>");
//!
//! assert_eq!(render("Plain **bold** text"), "<p>Plain <strong>bold</strong> text</p>");
//! assert_eq!(slugify("Hello, World!"), "hello-world");
//! ```
//!
//! ## Working with Documents
//!
//! The [`Document`] struct is the central data type: the parsed
//! frontmatter, the rendered HTML, and the raw markdown remainder.
//!
//! ```
//! use grist::{parse_document, FrontmatterValue};
//!
//! let doc = parse_document("---\ntags: [a, b]\ndraft: false\n---\nBody text.");
//! assert_eq!(doc.frontmatter["draft"], FrontmatterValue::Boolean(false));
//! assert_eq!(doc.content, "<p>Body text.</p>");
//! assert_eq!(doc.raw_content, "Body text.");
//! ```

pub mod document;
pub mod frontmatter;
pub mod render;
pub mod slug;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{Document, parse_document};
pub use frontmatter::{Frontmatter, FrontmatterValue, extract_frontmatter};
pub use render::{escape_html, render};
pub use slug::slugify;
