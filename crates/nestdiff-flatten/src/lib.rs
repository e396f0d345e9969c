//! Path flattening for nestdiff.
//!
//! Re-keys a nested mapping into a single-level [`FlatMap`] whose keys are
//! the joined paths of the leaves. Works on anything implementing
//! [`NestedMap`]: input trees, diff trees, and raw `serde_json` values.

pub mod config;
pub mod flatten;
pub mod nested;

pub use config::{FlattenConfig, DEFAULT_SEPARATOR};
pub use flatten::{flatten, flatten_with, FlatMap};
pub use nested::{NestedMap, Slot};
