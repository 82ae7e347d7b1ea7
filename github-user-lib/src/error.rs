use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

pub(crate) const ROOT_PATH: &str = "$";

#[derive(Debug, Error)]
pub enum GitHubUserError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Reason a JSON value could not be decoded into a [`crate::User`].
///
/// Every variant carries the path of the offending value: a bare key such as
/// `login` for a single object, `[2].login` for an element of an array, or
/// `$` for the document root.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("field `{path}` has wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: JsonKind,
    },

    #[error("field `{path}` is not an absolute URI ({value:?}): {reason}")]
    MalformedUri {
        path: String,
        value: String,
        reason: String,
    },
}

impl DecodeError {
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::TypeMismatch { path, .. }
            | Self::MalformedUri { path, .. } => path,
        }
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        fn prefix(path: String, index: usize) -> String {
            if path == ROOT_PATH {
                format!("[{index}]")
            } else {
                format!("[{index}].{path}")
            }
        }

        match self {
            Self::MissingField { path } => Self::MissingField {
                path: prefix(path, index),
            },
            Self::TypeMismatch {
                path,
                expected,
                found,
            } => Self::TypeMismatch {
                path: prefix(path, index),
                expected,
                found,
            },
            Self::MalformedUri {
                path,
                value,
                reason,
            } => Self::MalformedUri {
                path: prefix(path, index),
                value,
                reason,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}
