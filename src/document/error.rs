//! Document decoding errors.

use thiserror::Error;

/// Errors raised while desugaring a JSON document into nodes.
///
/// `path` is a JSON path into the document, e.g. `$.children[2].attrs.title`.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("{path}: unknown component `{name}`")]
    UnknownComponent { path: String, name: String },

    #[error("{path}: {reason}")]
    InvalidNode { path: String, reason: String },

    #[error("{path}: unsupported value for attribute `{name}`")]
    InvalidAttribute { path: String, name: String },

    #[error("{path}: invalid date `{value}`")]
    InvalidDate { path: String, value: String },
}

impl DocumentError {
    pub(crate) fn invalid_node(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// JSON path of the offending value, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::UnknownComponent { path, .. }
            | Self::InvalidNode { path, .. }
            | Self::InvalidAttribute { path, .. }
            | Self::InvalidDate { path, .. } => Some(path),
        }
    }
}
