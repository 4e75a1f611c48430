//! Named component registry.

use crate::build::Handler;
use crate::node::{Attributes, Content, Node, Render};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Name of the built-in component that renders its children without a wrapper.
pub const FRAGMENT: &str = "Fragment";

/// Maps component names used in documents to handlers.
#[derive(Clone, Default)]
pub struct Components {
    handlers: FxHashMap<String, Handler>,
}

impl Components {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in components (`Fragment`).
    pub fn with_builtins() -> Self {
        let mut components = Self::new();
        components.register(FRAGMENT, fragment);
        components
    }

    /// Register a closure under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(Option<Attributes>, Vec<Content>) -> Node + Send + Sync + 'static,
    {
        self.register_handler(name, Arc::new(f))
    }

    pub fn register_handler(&mut self, name: impl Into<String>, handler: Handler) -> &mut Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Components")
            .field("names", &self.names())
            .finish()
    }
}

/// Render children in place. Attributes are ignored.
fn fragment(_: Option<Attributes>, children: Vec<Content>) -> Node {
    let mut out = String::new();
    for child in &children {
        child.render_to(&mut out);
    }
    Node::text(out)
}
