//! Markup escaping and element classification.
//!
//! - `escape()` - text content (`&`, `<`, `>`, `"`)
//! - `escape_attr()` - attribute values (`&`, `"`, non-breaking space)
//! - `is_void_element()` - self-closing elements (br, img, etc.)

use std::borrow::Cow;

// =============================================================================
// Escaping
// =============================================================================

/// Characters escaped in text content.
const TEXT_ESCAPE_CHARS: [char; 4] = ['&', '<', '>', '"'];

/// Characters escaped in attribute values.
const ATTR_ESCAPE_CHARS: [char; 3] = ['&', '"', '\u{00A0}'];

#[inline]
fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

#[inline]
fn attr_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\u{00A0}' => Some("&nbsp;"),
        _ => None,
    }
}

/// Escape special characters in text content.
///
/// Each character is replaced at most once, so the `&` of an entity produced
/// here is never escaped again.
///
/// # Example
/// ```
/// use jsxmark::utils::html::escape;
///
/// assert_eq!(escape("<b>"), "&lt;b&gt;");
/// assert_eq!(escape("&<>\""), "&amp;&lt;&gt;&quot;");
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_ESCAPE_CHARS, text_entity)
}

/// Escape an attribute value.
///
/// Angle brackets are left alone: inside a double-quoted value only `&` and
/// `"` are significant. Non-breaking spaces become `&nbsp;`.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_ESCAPE_CHARS, attr_entity)
}

/// Internal: single pass over `s`, allocating only if something matches.
#[inline]
fn escape_with<'a>(
    s: &'a str,
    chars: &[char],
    entity: fn(char) -> Option<&'static str>,
) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if a tag is a void element.
///
/// Void elements render as `<tag attrs>` with no closing tag and never render
/// children. The match is exact and case-sensitive; tag names are already
/// kebab-cased when this is called.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
