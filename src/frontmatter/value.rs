//! Typed frontmatter values and raw-text coercion.

/// A single frontmatter value.
///
/// Values are one of four shapes: a plain string, a number, a boolean, or
/// a flat list of strings. There are no nested mappings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize), serde(untagged))]
pub enum FrontmatterValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<String>),
}

impl FrontmatterValue {
    /// Coerce a raw frontmatter value into its typed form.
    ///
    /// Tried in order: a `[...]` list, a quoted string, the literals
    /// `true`/`false`, a finite number, and finally the trimmed raw
    /// string. Earlier rules win; a quoted `"true"` stays a string.
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            return Self::List(parse_list(inner));
        }
        if let Some(inner) = unquote(raw) {
            return Self::String(inner.to_string());
        }
        match raw {
            "true" => return Self::Boolean(true),
            "false" => return Self::Boolean(false),
            _ => {}
        }
        if let Ok(number) = raw.parse::<f64>() {
            if number.is_finite() {
                return Self::Number(number);
            }
        }
        Self::String(raw.to_string())
    }

    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The items, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Split a bracketed list body into items.
///
/// Items are comma-separated, trimmed, and unwrapped from matching quotes.
/// They stay strings; no boolean or numeric coercion happens inside lists.
fn parse_list(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            unquote(item).unwrap_or(item).to_string()
        })
        .collect()
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\''))
    {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}
