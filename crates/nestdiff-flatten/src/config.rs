use serde::{Deserialize, Serialize};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Formatting options for [`flatten_with`](crate::flatten_with).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// Placed between path segments.
    pub separator: String,
    /// Prepended (followed by the separator) to every path. An empty prefix
    /// still contributes a leading separator; use `None` for bare paths.
    pub prefix: Option<String>,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            prefix: None,
        }
    }
}

impl FlattenConfig {
    /// Use `separator` between path segments.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Prepend `prefix` to every path.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}
