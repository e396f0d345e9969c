//! Error types for the diff crate.

/// Errors that can occur during diff operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// Input nesting went deeper than the configured limit.
    #[error("nesting depth exceeds the configured limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
