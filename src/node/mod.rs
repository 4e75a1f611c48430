//! Immutable node tree.
//!
//! # Module Structure
//!
//! ```text
//! node/
//! ├── attr       # Attributes, AttributeValue
//! ├── element    # ElementNode
//! ├── text       # TextNode
//! └── mod.rs     # Node, Content, Render (this file)
//! ```
//!
//! Nodes are created once by [`build`](crate::build::build) and never mutated.
//! Parents hold children through `Arc`, so fragments can be shared between
//! trees and rendered from several threads at once.

mod attr;
mod element;
mod text;

pub use attr::{AttributeValue, Attributes};
pub use element::ElementNode;
pub use text::TextNode;

use std::fmt;
use std::sync::Arc;

// =============================================================================
// Render
// =============================================================================

/// Serialize a value to markup.
pub trait Render {
    /// Append the markup for `self` to `out`.
    fn render_to(&self, out: &mut String);

    /// Render to a new string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

// =============================================================================
// Node
// =============================================================================

/// Shared reference to a text or element node.
///
/// Cloning a `Node` clones the reference, not the subtree.
#[derive(Debug, Clone)]
pub enum Node {
    Text(Arc<TextNode>),
    Element(Arc<ElementNode>),
}

impl Node {
    /// Create a text node. `contents` is emitted verbatim, without escaping.
    pub fn text(contents: impl Into<String>) -> Self {
        Self::Text(Arc::new(TextNode::new(contents)))
    }

    /// Create an element node. `tag_name` is kebab-cased.
    pub fn element(
        tag_name: &str,
        attributes: Option<Attributes>,
        children: Vec<Content>,
    ) -> Self {
        Self::Element(Arc::new(ElementNode::new(tag_name, attributes, children)))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Check whether two references point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Arc::ptr_eq(a, b),
            (Self::Element(a), Self::Element(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Render for Node {
    fn render_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => text.render_to(out),
            Self::Element(element) => element.render_to(out),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(Arc::new(text))
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(Arc::new(element))
    }
}

// =============================================================================
// Content
// =============================================================================

/// One entry of an element's children.
#[derive(Debug, Clone)]
pub enum Content {
    /// A node, rendered through its own `Render` impl.
    Node(Node),
    /// Already escaped text, emitted as is.
    Text(String),
}

impl Content {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl Render for Content {
    fn render_to(&self, out: &mut String) {
        match self {
            Self::Node(node) => node.render_to(out),
            Self::Text(text) => out.push_str(text),
        }
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_renders_verbatim() {
        let node = Node::text("<b>&amp;</b>");
        assert_eq!(node.render(), "<b>&amp;</b>");
        assert_eq!(node.to_string(), "<b>&amp;</b>");
    }

    #[test]
    fn test_accessors() {
        let text = Node::text("x");
        let element = Node::element("div", None, vec![]);

        assert!(text.is_text());
        assert!(!text.is_element());
        assert_eq!(text.as_text().map(TextNode::contents), Some("x"));
        assert!(text.as_element().is_none());

        assert!(element.is_element());
        assert_eq!(element.as_element().map(ElementNode::tag_name), Some("div"));
    }

    #[test]
    fn test_ptr_eq() {
        let a = Node::text("x");
        let b = a.clone();
        let c = Node::text("x");

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert!(!a.ptr_eq(&Node::element("x", None, vec![])));
    }

    #[test]
    fn test_content_render() {
        let items = [
            Content::Text("a &amp; ".to_string()),
            Content::Node(Node::text("<i>b</i>")),
        ];
        let mut out = String::new();
        for item in &items {
            item.render_to(&mut out);
        }
        assert_eq!(out, "a &amp; <i>b</i>");
        assert_eq!(items[0].as_text(), Some("a &amp; "));
        assert!(items[1].as_node().is_some());
    }

    #[test]
    fn test_nodes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<Content>();
    }

    #[test]
    fn test_render_shared_tree_across_threads() {
        let node = Node::element(
            "p",
            None,
            vec![
                Content::Text("a&amp;b".to_string()),
                Content::Node(Node::element("br", None, vec![])),
            ],
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let node = node.clone();
                std::thread::spawn(move || node.render())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "<p>a&amp;b<br></p>");
        }
        assert_eq!(node.render(), "<p>a&amp;b<br></p>");
    }
}
