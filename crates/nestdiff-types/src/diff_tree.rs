//! Diff output: a nested mapping whose leaves are [`ChangeRecord`]s.

use indexmap::map::{Iter, Keys};
use indexmap::IndexMap;
use serde::Serialize;

use crate::change::{ChangeKind, ChangeRecord};
use crate::key::Key;

/// One position of a [`DiffTree`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffNode {
    Tree(DiffTree),
    Change(ChangeRecord),
}

impl DiffNode {
    /// The nested level, if this node is one.
    pub fn as_tree(&self) -> Option<&DiffTree> {
        match self {
            DiffNode::Tree(tree) => Some(tree),
            DiffNode::Change(_) => None,
        }
    }

    /// The change record, if this node is a leaf.
    pub fn as_change(&self) -> Option<&ChangeRecord> {
        match self {
            DiffNode::Change(change) => Some(change),
            DiffNode::Tree(_) => None,
        }
    }
}

impl From<DiffTree> for DiffNode {
    fn from(tree: DiffTree) -> Self {
        DiffNode::Tree(tree)
    }
}

impl From<ChangeRecord> for DiffNode {
    fn from(change: ChangeRecord) -> Self {
        DiffNode::Change(change)
    }
}

/// The result of comparing two trees.
///
/// Keys absent from a level had no difference beneath them, so an empty
/// diff tree means the inputs were equal. Key order is discovery order:
/// keys of the old tree first, then keys only present in the new tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiffTree(IndexMap<Key, DiffNode>);

/// Leaf counts of a [`DiffTree`], by change kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    /// Total number of leaf changes.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Modified => self.modified += 1,
        }
    }
}

impl DiffTree {
    /// Create an empty diff tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries at this level (not leaf changes; see [`Self::change_count`]).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert a node, replacing any node under the same key.
    pub fn insert(&mut self, key: impl Into<Key>, node: impl Into<DiffNode>) -> Option<DiffNode> {
        self.0.insert(key.into(), node.into())
    }

    /// Look up a node at this level.
    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.0.get(key)
    }

    /// Follow `path` through nested levels.
    pub fn get_path(&self, path: &[&str]) -> Option<&DiffNode> {
        let (last, parents) = path.split_last()?;
        let mut level = self;
        for key in parents {
            level = level.get(key)?.as_tree()?;
        }
        level.get(last)
    }

    /// Entries of this level in discovery order.
    pub fn iter(&self) -> Iter<'_, Key, DiffNode> {
        self.0.iter()
    }

    /// Keys of this level in discovery order.
    pub fn keys(&self) -> Keys<'_, Key, DiffNode> {
        self.0.keys()
    }

    /// Count leaf changes by kind across all levels.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        let mut pending = vec![self];
        while let Some(level) = pending.pop() {
            for node in level.0.values() {
                match node {
                    DiffNode::Tree(tree) => pending.push(tree),
                    DiffNode::Change(change) => stats.record(change.kind()),
                }
            }
        }
        stats
    }

    /// Number of added leaves.
    pub fn additions(&self) -> usize {
        self.stats().added
    }

    /// Number of removed leaves.
    pub fn removals(&self) -> usize {
        self.stats().removed
    }

    /// Number of modified leaves.
    pub fn modifications(&self) -> usize {
        self.stats().modified
    }

    /// Number of leaf changes across all levels.
    pub fn change_count(&self) -> usize {
        self.stats().total()
    }
}

impl<'a> IntoIterator for &'a DiffTree {
    type Item = (&'a Key, &'a DiffNode);
    type IntoIter = Iter<'a, Key, DiffNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
