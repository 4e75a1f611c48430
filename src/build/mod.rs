//! Tree construction entry point.
//!
//! [`build`] is what a JSX-style expression desugars to:
//!
//! ```text
//! <Card title="x"><p>hi</p></Card>
//!   => build(Card, attrs{title: "x"}, [build("p", None, ["hi"])])
//! ```
//!
//! A [`Tag`] is either an element name or a [`Handler`] (a component). Names
//! produce an [`ElementNode`](crate::node::ElementNode); handlers receive the
//! attributes and the flattened children and return whatever node they build.

mod flatten;

pub use flatten::{Child, Value, flatten};

use crate::node::{Attributes, Content, Node};
use std::fmt;
use std::sync::Arc;

/// Reserved attribute whose value replaces the children as unescaped markup.
///
/// The value is trusted: it is emitted verbatim as the element's only content.
pub const RAW_HTML_KEY: &str = "dangerousInnerHtml";

/// A component: called with the attributes and flattened children.
pub type Handler = Arc<dyn Fn(Option<Attributes>, Vec<Content>) -> Node + Send + Sync>;

// =============================================================================
// Tag
// =============================================================================

/// What to build: a named element or a component.
#[derive(Clone)]
pub enum Tag {
    Name(String),
    Handler(Handler),
}

impl Tag {
    /// Wrap a closure as a component tag.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(Option<Attributes>, Vec<Content>) -> Node + Send + Sync + 'static,
    {
        Self::Handler(Arc::new(f))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Handler> for Tag {
    fn from(handler: Handler) -> Self {
        Self::Handler(handler)
    }
}

impl From<&Handler> for Tag {
    fn from(handler: &Handler) -> Self {
        Self::Handler(Arc::clone(handler))
    }
}

// =============================================================================
// build
// =============================================================================

/// Build a node from a tag, attributes and children.
///
/// If `attributes` contains [`RAW_HTML_KEY`], that entry is removed and the
/// children are replaced by a single text node holding its value unescaped.
/// Children are then flattened (see [`flatten`]). A handler tag is invoked
/// exactly once and its node returned unchanged; a name tag becomes a new
/// element with a kebab-cased tag name.
///
/// # Example
/// ```
/// use jsxmark::{attrs, children, build::build};
///
/// let node = build("img", Some(attrs! { "src" => "x.png" }), children![]);
/// assert_eq!(node.to_string(), r#"<img src="x.png">"#);
///
/// let raw = build("div", Some(attrs! { "dangerousInnerHtml" => "<b>x</b>" }), children![]);
/// assert_eq!(raw.to_string(), "<div><b>x</b></div>");
/// ```
pub fn build(
    tag: impl Into<Tag>,
    attributes: Option<Attributes>,
    children: impl IntoIterator<Item = Child>,
) -> Node {
    let mut attributes = attributes;

    let children: Vec<Child> = match attributes.as_mut().and_then(|a| a.remove(RAW_HTML_KEY)) {
        Some(raw) => vec![Child::Node(Node::text(raw.stringify()))],
        None => children.into_iter().collect(),
    };
    let contents = flatten(&children);

    match tag.into() {
        Tag::Handler(handler) => handler(attributes, contents),
        Tag::Name(name) => Node::element(&name, attributes, contents),
    }
}
