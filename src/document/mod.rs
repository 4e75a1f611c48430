//! JSON documents desugared into [`build`] calls.
//!
//! # Format
//!
//! ```text
//! child   := string | number | bool | null | [child, ...] | element
//! element := { "tag": name,       "attrs"?: {..} | null, "children"?: child | [child, ...] }
//!          | { "component": name, "attrs"?: {..} | null, "children"?: child | [child, ...] }
//! attr    := string | number | bool | null | { "$date": "2024-06-15T14:30:45Z" | millis }
//! ```
//!
//! A `null` `"attrs"` or `"children"` is the same as leaving it out; write
//! `[null]` for a literal `null` child. Attribute order follows the document.
//! Component names resolve through a [`Components`] registry.
//!
//! # Example
//!
//! ```
//! use jsxmark::document::{Components, Document};
//!
//! let json = r#"{"tag": "p", "attrs": {"className": "note"}, "children": ["a < b"]}"#;
//! let doc = Document::from_json(json, &Components::new()).unwrap();
//! assert_eq!(doc.to_string(), r#"<p class-name="note">a &lt; b</p>"#);
//! ```

mod components;
mod error;

pub use components::{Components, FRAGMENT};
pub use error::DocumentError;

use crate::build::{Child, Tag, Value, build, flatten};
use crate::config::RenderConfig;
use crate::debug;
use crate::node::{AttributeValue, Attributes, Content, Render};
use crate::utils::date::DateTimeUtc;
use serde_json::{Map, Value as Json};
use std::fmt;

const DATE_KEY: &str = "$date";
const DOCTYPE: &str = "<!DOCTYPE html>";

// =============================================================================
// Document
// =============================================================================

/// Flattened top-level contents of a decoded document.
#[derive(Debug, Clone)]
pub struct Document {
    contents: Vec<Content>,
}

impl Document {
    /// Parse and desugar a JSON document.
    pub fn from_json(json: &str, components: &Components) -> Result<Self, DocumentError> {
        let value: Json = serde_json::from_str(json)?;
        Self::from_value(&value, components)
    }

    /// Desugar an already parsed JSON value.
    pub fn from_value(value: &Json, components: &Components) -> Result<Self, DocumentError> {
        let root = Decoder { components }.child(value, "$")?;
        let contents = flatten(&[root]);
        debug!("document"; "decoded {} top-level item(s)", contents.len());
        Ok(Self { contents })
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Render with document-level options applied.
    pub fn to_markup(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        if config.doctype {
            out.push_str(DOCTYPE);
        }
        self.render_to(&mut out);
        if config.trailing_newline {
            out.push('\n');
        }
        out
    }
}

impl Render for Document {
    fn render_to(&self, out: &mut String) {
        for content in &self.contents {
            content.render_to(out);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Decoder
// =============================================================================

struct Decoder<'a> {
    components: &'a Components,
}

impl Decoder<'_> {
    fn child(&self, value: &Json, path: &str) -> Result<Child, DocumentError> {
        Ok(match value {
            Json::Null => Child::Value(Value::Null),
            Json::Bool(b) => Child::Value(Value::Bool(*b)),
            Json::Number(n) => Child::Value(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
            Json::String(s) => Child::Value(Value::Str(s.clone())),
            Json::Array(items) => Child::Nested(self.children(items, path)?),
            Json::Object(map) => self.element(map, path)?,
        })
    }

    fn children(&self, items: &[Json], path: &str) -> Result<Vec<Child>, DocumentError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.child(item, &format!("{path}[{i}]")))
            .collect()
    }

    fn element(&self, map: &Map<String, Json>, path: &str) -> Result<Child, DocumentError> {
        if let Some(key) = map
            .keys()
            .find(|key| !matches!(key.as_str(), "tag" | "component" | "attrs" | "children"))
        {
            return Err(DocumentError::invalid_node(path, format!("unknown key `{key}`")));
        }

        let tag = match (map.get("tag"), map.get("component")) {
            (Some(Json::String(name)), None) => Tag::from(name.as_str()),
            (None, Some(Json::String(name))) => self
                .components
                .get(name)
                .map(Tag::from)
                .ok_or_else(|| DocumentError::UnknownComponent {
                    path: path.to_string(),
                    name: name.clone(),
                })?,
            (Some(_), Some(_)) => {
                return Err(DocumentError::invalid_node(
                    path,
                    "`tag` and `component` are mutually exclusive",
                ));
            }
            (None, None) => {
                return Err(DocumentError::invalid_node(path, "missing `tag` or `component`"));
            }
            _ => return Err(DocumentError::invalid_node(path, "name must be a string")),
        };

        let attributes = match map.get("attrs") {
            None | Some(Json::Null) => None,
            Some(Json::Object(attrs)) => Some(self.attributes(attrs, &format!("{path}.attrs"))?),
            Some(_) => return Err(DocumentError::invalid_node(path, "`attrs` must be an object")),
        };

        let children_path = format!("{path}.children");
        let children = match map.get("children") {
            None | Some(Json::Null) => Vec::new(),
            Some(Json::Array(items)) => self.children(items, &children_path)?,
            Some(single) => vec![self.child(single, &children_path)?],
        };

        Ok(Child::Node(build(tag, attributes, children)))
    }

    fn attributes(&self, map: &Map<String, Json>, path: &str) -> Result<Attributes, DocumentError> {
        let mut attrs = Attributes::new();
        for (name, value) in map {
            let attr_path = format!("{path}.{name}");
            let value = match value {
                Json::Null => AttributeValue::Null,
                Json::Bool(b) => AttributeValue::Bool(*b),
                Json::Number(n) => AttributeValue::Number(n.as_f64().unwrap_or(f64::NAN)),
                Json::String(s) => AttributeValue::String(s.clone()),
                Json::Object(obj) if obj.len() == 1 && obj.contains_key(DATE_KEY) => {
                    AttributeValue::Date(date(&obj[DATE_KEY], &attr_path)?)
                }
                Json::Array(_) | Json::Object(_) => {
                    return Err(DocumentError::InvalidAttribute {
                        path: attr_path,
                        name: name.clone(),
                    });
                }
            };
            attrs.insert(name.as_str(), value);
        }
        Ok(attrs)
    }
}

/// Decode a `$date` value: an ISO string or milliseconds since the epoch.
fn date(value: &Json, path: &str) -> Result<DateTimeUtc, DocumentError> {
    let parsed = match value {
        Json::String(s) => DateTimeUtc::parse(s),
        Json::Number(n) => n.as_i64().and_then(DateTimeUtc::from_unix_millis),
        _ => None,
    };
    parsed.ok_or_else(|| DocumentError::InvalidDate {
        path: path.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::RAW_HTML_KEY;
    use crate::node::Node;
    use crate::{attrs, children};

    fn render(json: &str) -> String {
        Document::from_json(json, &Components::with_builtins())
            .unwrap()
            .to_string()
    }

    fn error(json: &str) -> DocumentError {
        Document::from_json(json, &Components::with_builtins()).unwrap_err()
    }

    #[test]
    fn test_element() {
        assert_eq!(
            render(r#"{"tag": "div", "attrs": {"id": "a"}, "children": ["x"]}"#),
            r#"<div id="a">x</div>"#
        );
    }

    #[test]
    fn test_matches_direct_build() {
        let json = r#"{
            "tag": "form",
            "attrs": {"actionUrl": "/go?a=1&b=2", "noValidate": true, "hidden": false},
            "children": [
                {"tag": "input", "attrs": {"tabIndex": 2}},
                "Tom & \"Jerry\"",
                [1.5, null]
            ]
        }"#;
        let direct = build(
            "form",
            Some(attrs! { "actionUrl" => "/go?a=1&b=2", "noValidate" => true, "hidden" => false }),
            children![
                build("input", Some(attrs! { "tabIndex" => 2 }), children![]),
                "Tom & \"Jerry\"",
                vec![Child::from(1.5), Child::Value(Value::Null)],
            ],
        );
        assert_eq!(render(json), direct.to_string());
        assert_eq!(
            render(json),
            r#"<form action-url="/go?a=1&amp;b=2" no-validate><input tab-index="2">Tom &amp; &quot;Jerry&quot;1.5null</form>"#
        );
    }

    #[test]
    fn test_attribute_order_preserved() {
        assert_eq!(
            render(r#"{"tag": "a", "attrs": {"z": "1", "a": "2", "m": "3"}}"#),
            r#"<a z="1" a="2" m="3"></a>"#
        );
    }

    #[test]
    fn test_single_child_without_array() {
        assert_eq!(render(r#"{"tag": "b", "children": "bold"}"#), "<b>bold</b>");
    }

    #[test]
    fn test_null_attrs_and_children_are_absent() {
        assert_eq!(render(r#"{"tag": "p", "attrs": null, "children": null}"#), "<p></p>");
        assert_eq!(render(r#"{"tag": "p", "children": [null]}"#), "<p>null</p>");
    }

    #[test]
    fn test_scalar_and_array_roots() {
        assert_eq!(render(r#""a < b""#), "a &lt; b");
        assert_eq!(render(r#"[{"tag": "br"}, "x", true]"#), "<br>xtrue");
    }

    #[test]
    fn test_raw_html_attribute() {
        let json = format!(r#"{{"tag": "div", "attrs": {{"{RAW_HTML_KEY}": "<em>hi</em>"}}, "children": ["gone"]}}"#);
        assert_eq!(render(&json), "<div><em>hi</em></div>");
    }

    #[test]
    fn test_date_attributes() {
        assert_eq!(
            render(r#"{"tag": "time", "attrs": {"dateTime": {"$date": "2024-06-15T14:30:45Z"}}}"#),
            r#"<time date-time="2024-06-15T14:30:45.000Z"></time>"#
        );
        assert_eq!(
            render(r#"{"tag": "time", "attrs": {"dateTime": {"$date": 0}}}"#),
            r#"<time date-time="1970-01-01T00:00:00.000Z"></time>"#
        );
    }

    #[test]
    fn test_null_attribute() {
        assert_eq!(render(r#"{"tag": "img", "attrs": {"alt": null}}"#), r#"<img alt="">"#);
    }

    #[test]
    fn test_component() {
        let mut components = Components::new();
        components.register("Card", |attrs, children| {
            build("section", attrs, children![build("div", None, children![children])])
        });
        let json = r#"{"component": "Card", "attrs": {"id": "c"}, "children": ["x & y"]}"#;
        let doc = Document::from_json(json, &components).unwrap();
        assert_eq!(doc.to_string(), r#"<section id="c"><div>x &amp; y</div></section>"#);
    }

    #[test]
    fn test_fragment_component() {
        assert_eq!(
            render(r#"{"tag": "ul", "children": {"component": "Fragment", "children": [{"tag": "li"}, {"tag": "li"}]}}"#),
            "<ul><li></li><li></li></ul>"
        );
    }

    #[test]
    fn test_unknown_component() {
        let err = error(r#"{"tag": "div", "children": [{"component": "Nope"}]}"#);
        assert!(matches!(
            &err,
            DocumentError::UnknownComponent { path, name } if path == "$.children[0]" && name == "Nope"
        ));
    }

    #[test]
    fn test_invalid_nodes() {
        assert!(matches!(error(r#"{"attrs": {}}"#), DocumentError::InvalidNode { .. }));
        assert!(matches!(error(r#"{"tag": 1}"#), DocumentError::InvalidNode { .. }));
        assert!(matches!(
            error(r#"{"tag": "a", "component": "Fragment"}"#),
            DocumentError::InvalidNode { .. }
        ));
        assert!(matches!(error(r#"{"tag": "a", "attrs": []}"#), DocumentError::InvalidNode { .. }));

        let err = error(r#"{"tag": "a", "href": "/"}"#);
        assert_eq!(err.to_string(), "$: unknown key `href`");
    }

    #[test]
    fn test_invalid_attribute() {
        let err = error(r#"{"tag": "a", "children": [{"tag": "b", "attrs": {"x": [1]}}]}"#);
        assert_eq!(err.path(), Some("$.children[0].attrs.x"));
        assert!(matches!(err, DocumentError::InvalidAttribute { name, .. } if name == "x"));
    }

    #[test]
    fn test_invalid_date() {
        let err = error(r#"{"tag": "time", "attrs": {"d": {"$date": "June"}}}"#);
        assert!(matches!(err, DocumentError::InvalidDate { value, .. } if value == "\"June\""));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(error("{"), DocumentError::Json(_)));
    }

    #[test]
    fn test_to_markup_options() {
        let doc = Document::from_json(r#"{"tag": "html"}"#, &Components::new()).unwrap();

        let plain = RenderConfig {
            doctype: false,
            trailing_newline: false,
        };
        assert_eq!(doc.to_markup(&plain), "<html></html>");

        let full = RenderConfig {
            doctype: true,
            trailing_newline: true,
        };
        assert_eq!(doc.to_markup(&full), "<!DOCTYPE html><html></html>\n");
    }

    #[test]
    fn test_contents_are_flat() {
        let doc = Document::from_json(r#"[["a", ["b"]], {"tag": "i"}]"#, &Components::new()).unwrap();
        assert_eq!(doc.contents().len(), 3);
        assert!(doc.contents()[2].as_node().is_some_and(Node::is_element));
    }
}
