//! Diff engine for nestdiff.
//!
//! Compares two nested trees level by level and produces a [`DiffTree`]
//! of the same shape whose leaves are [`ChangeRecord`]s. Unchanged leaves
//! and subtrees are omitted, so an empty result means the inputs are equal.
//!
//! # Key Types
//!
//! - [`diff`] -- Unbounded diff for trusted input
//! - [`Differ`] / [`DiffConfig`] -- Configured diff with a nesting-depth guard
//! - [`scalars_equal`] / [`trees_equal`] -- The equality rule shared by both paths
//!
//! [`DiffTree`]: nestdiff_types::DiffTree
//! [`ChangeRecord`]: nestdiff_types::ChangeRecord

pub mod config;
pub mod differ;
pub mod equality;
pub mod error;

pub use config::DiffConfig;
pub use differ::{diff, Differ};
pub use equality::{scalars_equal, trees_equal, values_equal, WRAPPED_SCALAR_KEY};
pub use error::{DiffError, DiffResult};
