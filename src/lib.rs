//! jsxmark - render JSX-style element trees to markup.
//!
//! Nested element expressions are normalized into an immutable node tree by
//! [`build`](build::build) and serialized on demand through [`Render`] or
//! `Display`.
//!
//! # Example
//!
//! ```
//! use jsxmark::{attrs, children, build::build};
//!
//! let page = build(
//!     "article",
//!     Some(attrs! { "dataId" => 7 }),
//!     children![
//!         build("h1", None, children!["Fish & Chips"]),
//!         build("img", Some(attrs! { "src" => "fish.png", "hidden" => false }), children![]),
//!     ],
//! );
//! assert_eq!(
//!     page.to_string(),
//!     r#"<article data-id="7"><h1>Fish &amp; Chips</h1><img src="fish.png"></article>"#
//! );
//! ```

pub mod build;
pub mod config;
pub mod document;
pub mod logger;
pub mod node;
pub mod utils;

pub use build::{Child, Handler, RAW_HTML_KEY, Tag, Value, build, flatten};
pub use node::{AttributeValue, Attributes, Content, ElementNode, Node, Render, TextNode};
