use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type error: {0}")]
    Type(#[from] nestdiff_types::TypeError),

    #[error("diff error: {0}")]
    Diff(#[from] nestdiff_diff::DiffError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
