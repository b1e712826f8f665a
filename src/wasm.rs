//! WASM bindings for browser-based markdown rendering.
//!
//! This module exposes the core transformations to JavaScript via
//! wasm-bindgen. Every binding is string-in, string-out and total.

use wasm_bindgen::prelude::*;

use crate::document::parse_document;
use crate::render::render;
use crate::slug::slugify;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render markdown to HTML, with no frontmatter handling.
#[wasm_bindgen]
pub fn markdown_to_html(markdown: &str) -> String {
    render(markdown)
}

/// Strip a leading frontmatter block and render the remainder to HTML.
#[wasm_bindgen]
pub fn document_to_html(markdown: &str) -> String {
    parse_document(markdown).content
}

/// Derive a URL-safe slug from text.
#[wasm_bindgen]
pub fn text_to_slug(text: &str) -> String {
    slugify(text)
}
