//! Frontmatter extraction and value typing.
//!
//! A document may begin with a metadata block fenced by `---` lines. This
//! module splits that block off and parses it into a key-ordered mapping
//! of typed values:
//!
//! - [`extract`]: block recognition and per-line key/value parsing
//! - [`value`]: the [`FrontmatterValue`] union and raw-text coercion
//!
//! Parsing never fails. A document without a block yields an empty
//! mapping, and malformed lines inside a block are dropped silently.

mod extract;
mod value;

pub use extract::{Frontmatter, extract_frontmatter};
pub use value::FrontmatterValue;
