//! Child content flattening.
//!
//! Authors pass children as arbitrarily nested sequences of nodes and raw
//! values. Elements store a flat list: nodes by reference, everything else as
//! escaped text.

use crate::node::{Content, Node};
use crate::utils::{html::escape, number::format_number};
use std::borrow::Cow;

// =============================================================================
// Raw values
// =============================================================================

/// A raw scalar child, stringified the way script concatenation does.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
    /// Renders as the text `null`.
    Null,
    /// Renders as the text `undefined`.
    Undefined,
}

impl Value {
    /// String form before escaping.
    pub fn stringify(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Null => Cow::Borrowed("null"),
            Self::Undefined => Cow::Borrowed("undefined"),
        }
    }
}

// =============================================================================
// Child
// =============================================================================

/// One construction-time child: a node, a raw value, or a nested sequence.
#[derive(Debug, Clone)]
pub enum Child {
    Node(Node),
    Value(Value),
    Nested(Vec<Child>),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Value> for Child {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Self::Value(Value::Str(s.to_string()))
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Self::Value(Value::Str(s))
    }
}

impl From<bool> for Child {
    fn from(b: bool) -> Self {
        Self::Value(Value::Bool(b))
    }
}

impl From<f64> for Child {
    fn from(n: f64) -> Self {
        Self::Value(Value::Number(n))
    }
}

impl From<i32> for Child {
    fn from(n: i32) -> Self {
        Self::Value(Value::Number(f64::from(n)))
    }
}

impl From<u32> for Child {
    fn from(n: u32) -> Self {
        Self::Value(Value::Number(f64::from(n)))
    }
}

impl From<i64> for Child {
    #[allow(clippy::cast_precision_loss)] // Same precision as script numbers
    fn from(n: i64) -> Self {
        Self::Value(Value::Number(n as f64))
    }
}

impl From<usize> for Child {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Value(Value::Number(n as f64))
    }
}

/// Flattened content fed back in as a child, e.g. by a component passing its
/// children on. Escaped text is wrapped in a text node so it is not escaped
/// a second time.
impl From<Content> for Child {
    fn from(content: Content) -> Self {
        match content {
            Content::Node(node) => Self::Node(node),
            Content::Text(text) => Self::Node(Node::text(text)),
        }
    }
}

/// `None` stringifies to `undefined`, as a missing value does in a template.
impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Value(Value::Undefined), Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Self::Nested(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(items: [T; N]) -> Self {
        Self::Nested(items.into_iter().map(Into::into).collect())
    }
}

/// Build a `Vec<Child>` from heterogeneous values.
///
/// ```
/// use jsxmark::{children, build::build};
///
/// let node = build("p", None, children!["count: ", 3]);
/// assert_eq!(node.to_string(), "<p>count: 3</p>");
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        ::std::vec![$($crate::build::Child::from($child)),*]
    };
}

// =============================================================================
// Flattening
// =============================================================================

/// Flatten nested children depth-first, left to right.
///
/// Nodes are passed through by reference and never escaped. Raw values are
/// stringified and escaped into [`Content::Text`]. The input is not modified.
pub fn flatten(children: &[Child]) -> Vec<Content> {
    let mut out = Vec::with_capacity(children.len());
    flatten_into(children, &mut out);
    out
}

fn flatten_into(children: &[Child], out: &mut Vec<Content>) {
    for child in children {
        match child {
            Child::Node(node) => out.push(Content::Node(node.clone())),
            Child::Nested(nested) => flatten_into(nested, out),
            Child::Value(value) => {
                out.push(Content::Text(escape(&value.stringify()).into_owned()));
            }
        }
    }
}
