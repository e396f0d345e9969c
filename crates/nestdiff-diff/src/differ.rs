//! Recursive tree diff.
//!
//! Each level is compared key by key. Keys of the old tree are visited
//! first, in order, followed by keys that only exist in the new tree, so
//! the output order is deterministic. Subtrees that appear or disappear as
//! a whole are reported leaf by leaf, keeping their shape.

use nestdiff_types::{ChangeRecord, DiffNode, DiffTree, Scalar, Tree, Value};
use tracing::{debug, trace};

use crate::config::DiffConfig;
use crate::equality::{trees_equal, values_equal, WRAPPED_SCALAR_KEY};
use crate::error::{DiffError, DiffResult};

/// Compare two trees with no depth limit.
///
/// Use [`Differ`] with [`DiffConfig::untrusted`] when the input nesting is
/// not under the caller's control.
pub fn diff(old: &Tree, new: &Tree) -> DiffTree {
    // An unbounded differ has no failure path.
    Differ::default().diff(old, new).unwrap_or_default()
}

/// A configured differ.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    /// Create a differ with the given configuration.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// The configuration this differ applies.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare `old` against `new`.
    ///
    /// Returns an empty [`DiffTree`] when the trees are equal. Equal
    /// subtrees are skipped without being walked, at any level, so the depth
    /// limit only counts levels the walk descends into: subtrees that differ
    /// and subtrees that were added or removed. Fails only when one of those
    /// is nested deeper than the configured limit.
    pub fn diff(&self, old: &Tree, new: &Tree) -> DiffResult<DiffTree> {
        if trees_equal(old, new) {
            trace!(keys = old.len(), "trees equal, skipping walk");
            return Ok(DiffTree::new());
        }

        let diff = self.diff_level(old, new, 0).inspect_err(|e| {
            debug!(error = %e, "diff aborted");
        })?;

        debug!(
            old_keys = old.len(),
            new_keys = new.len(),
            changes = diff.change_count(),
            "diff complete"
        );
        Ok(diff)
    }

    fn enter(&self, depth: usize) -> DiffResult<()> {
        match self.config.max_depth {
            Some(limit) if depth > limit => Err(DiffError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn diff_level(&self, old: &Tree, new: &Tree, depth: usize) -> DiffResult<DiffTree> {
        self.enter(depth)?;
        let mut diff = DiffTree::new();

        // Removed and modified keys.
        for (key, old_value) in old {
            let Some(new_value) = new.get(key.as_str()) else {
                diff.insert(key.clone(), self.mark(old_value, ChangeRecord::removed, depth + 1)?);
                continue;
            };
            if let Some(node) = self.diff_values(old_value, new_value, depth + 1)? {
                diff.insert(key.clone(), node);
            }
        }

        // Added keys.
        for (key, new_value) in new {
            if !old.contains_key(key.as_str()) {
                diff.insert(key.clone(), self.mark(new_value, ChangeRecord::added, depth + 1)?);
            }
        }

        Ok(diff)
    }

    /// Compare two values stored under the same key. `None` means equal.
    fn diff_values(&self, old: &Value, new: &Value, depth: usize) -> DiffResult<Option<DiffNode>> {
        if values_equal(old, new) {
            trace!(depth, "subtree unchanged");
            return Ok(None);
        }

        let nested = match (old, new) {
            (Value::Scalar(a), Value::Scalar(b)) => {
                return Ok(Some(ChangeRecord::modified(a.clone(), b.clone()).into()));
            }
            (Value::Map(a), Value::Map(b)) => self.diff_level(a, b, depth)?,
            // A scalar facing a mapping is compared as `{"0": scalar}`.
            (Value::Map(a), Value::Scalar(b)) => self.diff_level(a, &wrap(b), depth)?,
            (Value::Scalar(a), Value::Map(b)) => self.diff_level(&wrap(a), b, depth)?,
        };

        // Unequal values always yield at least one entry.
        Ok((!nested.is_empty()).then(|| nested.into()))
    }

    /// Mark every leaf under `value` with the record `make` builds.
    ///
    /// `make` is [`ChangeRecord::added`] or [`ChangeRecord::removed`], so the
    /// added and removed sweeps share this walk.
    fn mark(&self, value: &Value, make: fn(Scalar) -> ChangeRecord, depth: usize) -> DiffResult<DiffNode> {
        match value {
            Value::Scalar(s) => Ok(make(s.clone()).into()),
            Value::Map(tree) => {
                self.enter(depth)?;
                let mut marked = DiffTree::new();
                for (key, child) in tree {
                    marked.insert(key.clone(), self.mark(child, make, depth + 1)?);
                }
                Ok(marked.into())
            }
        }
    }
}

fn wrap(scalar: &Scalar) -> Tree {
    Tree::singleton(WRAPPED_SCALAR_KEY, scalar.clone())
}
