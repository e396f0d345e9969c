//! High-level API for nestdiff.
//!
//! Combines the differ and the flattener behind one entry point and adds
//! JSON document handling with root validation. This is the main entry
//! point for applications embedding nestdiff.

pub mod comparator;
pub mod error;

pub use comparator::{compare, diff_json, flat_json, Comparator};
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use nestdiff_diff::{diff, DiffConfig, DiffError, Differ};
pub use nestdiff_flatten::{flatten, flatten_with, FlatMap, FlattenConfig, NestedMap};
pub use nestdiff_types::{
    ChangeKind, ChangeRecord, DiffNode, DiffStats, DiffTree, Key, Opaque, Scalar, Tree, TypeError,
    Value,
};
