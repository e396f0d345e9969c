//! The shape the flattener walks.

use std::borrow::Cow;

use nestdiff_types::{ChangeRecord, DiffNode, DiffTree, Scalar, Tree, Value};

/// What sits under a key: another mapping to descend into, or a leaf.
pub enum Slot<'a, M: NestedMap + ?Sized> {
    Nested(&'a M),
    Leaf(&'a M::Leaf),
}

/// A mapping whose values are either nested mappings of the same type or
/// leaves.
pub trait NestedMap {
    /// The value emitted for each leaf.
    type Leaf: Clone;

    /// Entries of this level, in iteration order.
    fn slots(&self) -> impl Iterator<Item = (Cow<'_, str>, Slot<'_, Self>)>;
}

impl NestedMap for Tree {
    type Leaf = Scalar;

    fn slots(&self) -> impl Iterator<Item = (Cow<'_, str>, Slot<'_, Self>)> {
        self.iter().map(|(key, value)| {
            let slot = match value {
                Value::Map(tree) => Slot::Nested(tree),
                Value::Scalar(scalar) => Slot::Leaf(scalar),
            };
            (Cow::Borrowed(key.as_str()), slot)
        })
    }
}

/// Change records are leaves; they are never descended into.
impl NestedMap for DiffTree {
    type Leaf = ChangeRecord;

    fn slots(&self) -> impl Iterator<Item = (Cow<'_, str>, Slot<'_, Self>)> {
        self.iter().map(|(key, node)| {
            let slot = match node {
                DiffNode::Tree(tree) => Slot::Nested(tree),
                DiffNode::Change(change) => Slot::Leaf(change),
            };
            (Cow::Borrowed(key.as_str()), slot)
        })
    }
}

/// Objects and arrays are mappings (arrays keyed by position); every other
/// JSON value is a leaf. A scalar has no entries.
impl NestedMap for serde_json::Value {
    type Leaf = serde_json::Value;

    fn slots(&self) -> impl Iterator<Item = (Cow<'_, str>, Slot<'_, Self>)> {
        let object = self
            .as_object()
            .into_iter()
            .flatten()
            .map(|(key, value)| (Cow::Borrowed(key.as_str()), json_slot(value)));
        let array = self
            .as_array()
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, value)| (Cow::Owned(index.to_string()), json_slot(value)));
        object.chain(array)
    }
}

fn json_slot(value: &serde_json::Value) -> Slot<'_, serde_json::Value> {
    if value.is_object() || value.is_array() {
        Slot::Nested(value)
    } else {
        Slot::Leaf(value)
    }
}
