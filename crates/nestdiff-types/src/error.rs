use thiserror::Error;

/// Errors produced by type conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected a mapping at the root, found {found}")]
    NotAMapping { found: &'static str },

    #[error("opaque values cannot be serialized")]
    UnserializableOpaque,

    #[error("json error: {0}")]
    Json(String),
}

/// Convenience alias for type conversion results.
pub type TypeResult<T> = Result<T, TypeError>;
