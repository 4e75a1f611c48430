//! Element attributes.
//!
//! `Attributes` keeps insertion order: attributes render in the order they
//! were first set. Setting an existing key again replaces its value in place.

use crate::utils::{
    date::DateTimeUtc,
    html::escape_attr,
    number::format_number,
};

// =============================================================================
// AttributeValue
// =============================================================================

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    String(String),
    /// Rendered as an ISO-8601 timestamp.
    Date(DateTimeUtc),
    /// `true` renders the bare name, `false` omits the attribute.
    Bool(bool),
    /// Absent value (`null` / `undefined`). Renders as `name=""`.
    Null,
}

impl AttributeValue {
    /// Serialize as a `name="value"` pair, or an empty string when the
    /// attribute is omitted. `name` must already be kebab-cased.
    pub fn to_attribute(&self, name: &str) -> String {
        match self {
            Self::Bool(true) => name.to_string(),
            Self::Bool(false) => String::new(),
            Self::Date(date) => quoted(name, &date.to_iso_string()),
            Self::Number(n) => quoted(name, &format_number(*n)),
            Self::String(s) => quoted(name, s),
            Self::Null => quoted(name, ""),
        }
    }

    /// Plain string form of the value, without escaping.
    ///
    /// `Null` becomes the empty string.
    pub fn stringify(&self) -> String {
        match self {
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::Date(date) => date.to_iso_string(),
            Self::Bool(b) => b.to_string(),
            Self::Null => String::new(),
        }
    }
}

#[inline]
fn quoted(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for AttributeValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for AttributeValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for AttributeValue {
    #[allow(clippy::cast_precision_loss)] // Same precision as script numbers
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for AttributeValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<DateTimeUtc> for AttributeValue {
    fn from(date: DateTimeUtc) -> Self {
        Self::Date(date)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, returning the previous value.
    ///
    /// An existing key keeps its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Remove an attribute, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// Build an [`Attributes`] map from `name => value` pairs.
///
/// ```
/// use jsxmark::attrs;
///
/// let attrs = attrs! { "className" => "card", "hidden" => true };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::node::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::node::Attributes::new();
        $( attrs.insert($name, $value); )+
        attrs
    }};
}
