//! Text leaf.

use super::Render;
use std::fmt;

/// A leaf holding render-ready markup.
///
/// The contents are never escaped again: they are either produced by the
/// escaper or deliberately raw (the `dangerousInnerHtml` escape hatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    contents: String,
}

impl TextNode {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Render for TextNode {
    #[inline]
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.contents);
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}
