use serde::{Deserialize, Serialize};

/// Nesting depth suited to untrusted input. Matches the default recursion
/// limit `serde_json` applies while parsing.
pub const UNTRUSTED_MAX_DEPTH: usize = 128;

/// Configuration for [`Differ`](crate::Differ).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Deepest nesting level below the root the differ will descend into.
    /// `None` places no limit.
    pub max_depth: Option<usize>,
}

impl DiffConfig {
    /// No depth limit. Only for input whose nesting is already bounded.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Reject input nested deeper than `max_depth` levels below the root.
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// A limit suited to attacker-controlled input.
    pub fn untrusted() -> Self {
        Self::bounded(UNTRUSTED_MAX_DEPTH)
    }
}
