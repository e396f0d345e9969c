use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Scalar;

/// What happened to a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    /// Lowercase name, as used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single leaf-level change.
///
/// The constructors enforce which side is absent: an added leaf has no old
/// value, a removed leaf has no new value, and a modified leaf has both.
/// An absent side is `None`, which is distinct from a present
/// [`Scalar::Null`]. Records are immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_value: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_value: Option<Scalar>,
}

impl ChangeRecord {
    /// A leaf present only in the new tree.
    pub fn added(new_value: Scalar) -> Self {
        Self {
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    /// A leaf present only in the old tree.
    pub fn removed(old_value: Scalar) -> Self {
        Self {
            kind: ChangeKind::Removed,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    /// A leaf whose value differs between the trees.
    pub fn modified(old_value: Scalar, new_value: Scalar) -> Self {
        Self {
            kind: ChangeKind::Modified,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// What happened to the leaf.
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// The value before the change; `None` for an added leaf.
    pub fn old_value(&self) -> Option<&Scalar> {
        self.old_value.as_ref()
    }

    /// The value after the change; `None` for a removed leaf.
    pub fn new_value(&self) -> Option<&Scalar> {
        self.new_value.as_ref()
    }

    /// Take the record apart into kind, old value and new value.
    pub fn into_parts(self) -> (ChangeKind, Option<Scalar>, Option<Scalar>) {
        (self.kind, self.old_value, self.new_value)
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.old_value, &self.new_value) {
            (Some(old), Some(new)) => write!(f, "{}: {old} -> {new}", self.kind),
            (Some(old), None) => write!(f, "{}: {old}", self.kind),
            (None, Some(new)) => write!(f, "{}: {new}", self.kind),
            (None, None) => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_absent_sides() {
        let added = ChangeRecord::added(Scalar::Int(1));
        assert_eq!(added.kind(), ChangeKind::Added);
        assert_eq!(added.old_value(), None);
        assert_eq!(added.new_value(), Some(&Scalar::Int(1)));

        let removed = ChangeRecord::removed(Scalar::Null);
        assert_eq!(removed.kind(), ChangeKind::Removed);
        assert_eq!(removed.old_value(), Some(&Scalar::Null));
        assert_eq!(removed.new_value(), None);
    }

    #[test]
    fn into_parts_moves_both_sides_out() {
        let (kind, old, new) = ChangeRecord::modified("a".into(), Scalar::Null).into_parts();
        assert_eq!(kind, ChangeKind::Modified);
        assert_eq!(old, Some(Scalar::from("a")));
        assert_eq!(new, Some(Scalar::Null));

        let (kind, old, new) = ChangeRecord::removed(Scalar::Bool(false)).into_parts();
        assert_eq!((kind, old, new), (ChangeKind::Removed, Some(Scalar::Bool(false)), None));
    }

    #[test]
    fn equality_compares_all_fields() {
        let a = ChangeRecord::modified("x".into(), "y".into());
        assert_eq!(a, ChangeRecord::modified("x".into(), "y".into()));
        assert_ne!(a, ChangeRecord::modified("y".into(), "x".into()));
        assert_ne!(ChangeRecord::added(Scalar::Null), ChangeRecord::removed(Scalar::Null));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(ChangeRecord::modified(Scalar::Int(1), Scalar::Int(2))).unwrap();
        assert_eq!(json, json!({"type": "modified", "old_value": 1, "new_value": 2}));

        let json = serde_json::to_value(ChangeRecord::added(Scalar::Null)).unwrap();
        assert_eq!(json, json!({"type": "added", "new_value": null}));
    }

    #[test]
    fn display_forms() {
        assert_eq!(
            ChangeRecord::modified("John".into(), "John Doe".into()).to_string(),
            "modified: \"John\" -> \"John Doe\""
        );
        assert_eq!(ChangeRecord::removed(Scalar::Bool(true)).to_string(), "removed: true");
        assert_eq!(ChangeKind::Added.to_string(), "added");
    }
}
