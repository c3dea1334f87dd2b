//! Catalog error model.

use thiserror::Error;

/// Result type used wherever a navigation catalog is loaded or validated.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure while loading or validating navigation configuration.
///
/// Resolution itself never fails; these errors only surface at the
/// configuration edge (parsing a catalog document, validating ids).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog document could not be read.
    #[error("failed to read catalog '{path}': {message}")]
    Io { path: String, message: String },

    /// The catalog document is not valid JSON for the catalog schema.
    #[error("malformed catalog: {0}")]
    Parse(String),

    /// An identifier was invalid (empty, whitespace, or contains '.').
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two siblings share the same id.
    #[error("duplicate item id '{id}' under '{parent}'")]
    DuplicateId { parent: String, id: String },

    /// A domain or student variant has no tree configured.
    #[error("missing navigation tree for {0}")]
    MissingTree(String),

    /// Any other structural problem with the catalog.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate(parent: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            parent: parent.into(),
            id: id.into(),
        }
    }

    pub fn missing_tree(what: impl Into<String>) -> Self {
        Self::MissingTree(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
