//! Foundation types for nestdiff.
//!
//! This crate provides the value model shared by the differ and the
//! flattener: canonical keys, nested trees of scalars, and the change
//! records a diff produces. Every other nestdiff crate depends on
//! `nestdiff-types`.
//!
//! # Key Types
//!
//! - [`Key`] -- Canonical string key (integers, booleans and null are normalized)
//! - [`Scalar`] / [`Opaque`] -- Leaf values; opaque values compare by identity
//! - [`Value`] / [`Tree`] -- Nested, insertion-ordered mappings
//! - [`ChangeRecord`] / [`ChangeKind`] -- A single leaf-level change
//! - [`DiffTree`] / [`DiffNode`] -- Diff output mirroring the input shape

pub mod change;
pub mod diff_tree;
pub mod error;
pub mod key;
pub mod tree;
pub mod value;

pub use change::{ChangeKind, ChangeRecord};
pub use diff_tree::{DiffNode, DiffStats, DiffTree};
pub use error::{TypeError, TypeResult};
pub use key::Key;
pub use tree::Tree;
pub use value::{Opaque, Scalar, Value};
