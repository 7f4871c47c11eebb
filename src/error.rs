use thiserror::Error;

use crate::ast::{Arity, Operator};

/// Errors raised while turning a filter payload into SQL.
#[derive(Debug, Error)]
pub enum Error {
    /// Operator tag outside the supported set
    #[error("unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },

    /// The rule value does not have the shape the operator needs
    #[error("operator '{operator}' expects {expected}, got {found}")]
    InvalidValueArity {
        operator: Operator,
        expected: Arity,
        found: String,
    },

    /// Type tag outside the supported set (only raised in strict mode)
    #[error("unsupported type '{type_tag}'")]
    UnsupportedType { type_tag: String },

    /// The filter object is missing required fields or has the wrong structure
    #[error("malformed filter at {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// A group without children cannot produce a predicate
    #[error("empty group at {path}")]
    EmptyGroup { path: String },

    /// The filter text is not JSON at all
    #[error("invalid filter JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Error::Malformed {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
