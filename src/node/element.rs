//! Element node and its serialization.

use super::{Attributes, Content, Render};
use crate::utils::{case::to_kebab_case, html::is_void_element};
use std::fmt;

/// A markup element with attributes and ordered children.
#[derive(Debug, Clone)]
pub struct ElementNode {
    tag_name: String,
    attributes: Option<Attributes>,
    children: Vec<Content>,
}

impl ElementNode {
    /// Create an element. `tag_name` is kebab-cased here, so the stored name
    /// is always lowercase.
    pub fn new(tag_name: &str, attributes: Option<Attributes>, children: Vec<Content>) -> Self {
        Self {
            tag_name: to_kebab_case(tag_name),
            attributes,
            children,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Void elements never render children or a closing tag.
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag_name)
    }

    /// Append ` name="value" ...` for every rendered attribute.
    ///
    /// Omitted attributes (`false`) leave no whitespace behind.
    fn render_attributes(&self, out: &mut String) {
        let Some(attributes) = &self.attributes else {
            return;
        };

        for (name, value) in attributes.iter() {
            let attr = value.to_attribute(&to_kebab_case(name));
            if !attr.is_empty() {
                out.push(' ');
                out.push_str(&attr);
            }
        }
    }
}

impl Render for ElementNode {
    fn render_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        self.render_attributes(out);
        out.push('>');

        // Children of a void element are kept on the node but never rendered
        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.render_to(out);
        }

        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
