use indexmap::IndexMap;
use tracing::debug;

use crate::config::FlattenConfig;
use crate::nested::{NestedMap, Slot};

/// A single-level mapping from joined path to leaf, in visit order.
pub type FlatMap<L> = IndexMap<String, L>;

/// Flatten with the default separator (`/`) and no prefix.
pub fn flatten<M: NestedMap>(tree: &M) -> FlatMap<M::Leaf> {
    flatten_with(tree, &FlattenConfig::default())
}

/// Flatten `tree` into a single-level map keyed by joined paths.
///
/// A leaf at path `[k1, .., kn]` is stored under `k1{sep}..{sep}kn`, or
/// under `prefix{sep}k1{sep}..{sep}kn` when a prefix is configured. Nested
/// mappings never appear in the output; empty ones contribute nothing.
/// When two leaves produce the same path the later one wins, keeping the
/// position of the first.
///
/// The walk uses an explicit stack, so input depth is not bounded by the
/// call stack.
pub fn flatten_with<M: NestedMap>(tree: &M, config: &FlattenConfig) -> FlatMap<M::Leaf> {
    let separator = config.separator.as_str();
    let mut flat = FlatMap::new();
    let mut overwritten = 0usize;
    let mut stack = vec![(config.prefix.clone(), tree.slots())];

    while let Some((path, slots)) = stack.last_mut() {
        let Some((key, slot)) = slots.next() else {
            stack.pop();
            continue;
        };
        let joined = match path {
            Some(parent) => format!("{parent}{separator}{key}"),
            None => key.into_owned(),
        };
        match slot {
            Slot::Leaf(leaf) => {
                if flat.insert(joined, leaf.clone()).is_some() {
                    overwritten += 1;
                }
            }
            Slot::Nested(inner) => stack.push((Some(joined), inner.slots())),
        }
    }

    debug!(entries = flat.len(), overwritten, "flattened tree");
    flat
}
