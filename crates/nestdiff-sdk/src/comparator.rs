use nestdiff_diff::{diff, DiffConfig, Differ};
use nestdiff_flatten::{flatten_with, FlatMap, FlattenConfig};
use nestdiff_types::{ChangeRecord, DiffTree, Tree, TypeError};
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Diff two trees and flatten the result into path-keyed change records.
///
/// No depth limit is applied; see [`Comparator::untrusted`] for input the
/// caller does not control.
pub fn compare(old: &Tree, new: &Tree, config: &FlattenConfig) -> FlatMap<ChangeRecord> {
    flatten_with(&diff(old, new), config)
}

/// Diff two JSON documents. Both roots must be objects or arrays.
pub fn diff_json(old: &serde_json::Value, new: &serde_json::Value) -> SdkResult<DiffTree> {
    Comparator::default().diff_json(old, new)
}

/// A differ and flatten settings bundled together.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    differ: Differ,
    flatten: FlattenConfig,
}

impl Comparator {
    /// Bundle a differ built from `diff` with `flatten` settings.
    pub fn new(diff: DiffConfig, flatten: FlattenConfig) -> Self {
        Self {
            differ: Differ::new(diff),
            flatten,
        }
    }

    /// Depth-limited comparator for attacker-controlled input.
    pub fn untrusted() -> Self {
        Self::new(DiffConfig::untrusted(), FlattenConfig::default())
    }

    /// Replace the flatten settings.
    pub fn with_flatten(mut self, flatten: FlattenConfig) -> Self {
        self.flatten = flatten;
        self
    }

    /// Settings of the underlying differ.
    pub fn diff_config(&self) -> &DiffConfig {
        self.differ.config()
    }

    /// Settings used when flattening.
    pub fn flatten_config(&self) -> &FlattenConfig {
        &self.flatten
    }

    /// Diff two trees with this comparator's differ.
    pub fn diff(&self, old: &Tree, new: &Tree) -> SdkResult<DiffTree> {
        Ok(self.differ.diff(old, new)?)
    }

    /// Diff, then flatten with this comparator's settings.
    pub fn compare(&self, old: &Tree, new: &Tree) -> SdkResult<FlatMap<ChangeRecord>> {
        Ok(flatten_with(&self.diff(old, new)?, &self.flatten))
    }

    /// Diff two JSON documents without copying them. Both roots must be
    /// objects or arrays.
    pub fn diff_json(&self, old: &serde_json::Value, new: &serde_json::Value) -> SdkResult<DiffTree> {
        let old = root_tree("old", old)?;
        let new = root_tree("new", new)?;
        self.diff(&old, &new)
    }

    /// Diff two JSON documents, then flatten.
    pub fn compare_json(
        &self,
        old: &serde_json::Value,
        new: &serde_json::Value,
    ) -> SdkResult<FlatMap<ChangeRecord>> {
        let flat = flatten_with(&self.diff_json(old, new)?, &self.flatten);
        debug!(changes = flat.len(), "compared json documents");
        Ok(flat)
    }

    /// Parse two JSON texts and compare them.
    pub fn compare_json_str(&self, old: &str, new: &str) -> SdkResult<FlatMap<ChangeRecord>> {
        let old: serde_json::Value = serde_json::from_str(old)?;
        let new: serde_json::Value = serde_json::from_str(new)?;
        self.compare_json(&old, &new)
    }
}

/// Render a flat change map as a JSON object.
pub fn flat_json(flat: &FlatMap<ChangeRecord>) -> SdkResult<serde_json::Value> {
    Ok(serde_json::to_value(flat)?)
}

fn root_tree(side: &str, json: &serde_json::Value) -> SdkResult<Tree> {
    Tree::try_from(json).map_err(|e| match e {
        TypeError::NotAMapping { found } => SdkError::InvalidArgument(format!(
            "{side} root must be an object or array, found {found}"
        )),
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestdiff_diff::DiffError;
    use nestdiff_types::{ChangeKind, Opaque, Scalar};
    use serde_json::json;

    fn user_documents() -> (serde_json::Value, serde_json::Value) {
        let old = json!({
            "user": {
                "name": "John",
                "age": 30,
                "settings": {"darkMode": true, "notifications": true}
            }
        });
        let new = json!({
            "user": {
                "name": "John Doe",
                "age": 30,
                "settings": {"darkMode": true, "notifications": false},
                "lastLogin": "2025-03-20"
            }
        });
        (old, new)
    }

    #[test]
    fn compare_flattens_the_diff() {
        let (old, new) = user_documents();
        let old = Tree::try_from(old).unwrap();
        let new = Tree::try_from(new).unwrap();

        let flat = compare(&old, &new, &FlattenConfig::default().with_separator("."));
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, ["user.name", "user.settings.notifications", "user.lastLogin"]);
        assert_eq!(
            flat["user.name"],
            ChangeRecord::modified("John".into(), "John Doe".into())
        );
        assert_eq!(flat["user.lastLogin"].kind(), ChangeKind::Added);
    }

    #[test]
    fn compare_json_uses_configured_prefix() {
        let (old, new) = user_documents();
        let comparator = Comparator::default()
            .with_flatten(FlattenConfig::default().with_separator(".").with_prefix("doc"));

        let flat = comparator.compare_json(&old, &new).unwrap();
        assert!(flat.contains_key("doc.user.settings.notifications"));
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn scalar_roots_are_invalid_arguments() {
        let err = diff_json(&json!(1), &json!({})).unwrap_err();
        match err {
            SdkError::InvalidArgument(msg) => {
                assert!(msg.contains("old"), "unexpected message: {msg}");
                assert!(msg.contains("int"), "unexpected message: {msg}");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }

        let err = diff_json(&json!([]), &json!("x")).unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(msg) if msg.contains("new")));
    }

    #[test]
    fn array_roots_are_index_keyed() {
        let diff = diff_json(&json!(["a", "b"]), &json!(["a", "c", "d"])).unwrap();
        assert_eq!(
            diff.get("1").and_then(|n| n.as_change()),
            Some(&ChangeRecord::modified("b".into(), "c".into()))
        );
        assert_eq!(diff.get("2").and_then(|n| n.as_change()).map(ChangeRecord::kind), Some(ChangeKind::Added));
    }

    #[test]
    fn compare_json_str_reports_parse_errors() {
        let err = Comparator::default().compare_json_str("{", "{}").unwrap_err();
        assert!(matches!(err, SdkError::Json(_)));

        let flat = Comparator::default()
            .compare_json_str(r#"{"a": 1}"#, r#"{"a": 2}"#)
            .unwrap();
        assert_eq!(flat["a"], ChangeRecord::modified(Scalar::Int(1), Scalar::Int(2)));
    }

    #[test]
    fn untrusted_comparator_limits_depth() {
        let mut deep = json!("leaf");
        for _ in 0..200 {
            deep = json!({ "k": deep });
        }
        let err = Comparator::untrusted().diff_json(&json!({}), &deep).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Diff(DiffError::DepthLimitExceeded { limit: 128 })
        ));
    }

    #[test]
    fn diff_json_leaves_inputs_untouched() {
        let (old, new) = user_documents();
        let (old_copy, new_copy) = (old.clone(), new.clone());

        let diff = Comparator::default().diff_json(&old, &new).unwrap();
        assert_eq!(diff.change_count(), 3);
        assert_eq!((old, new), (old_copy, new_copy));
    }

    #[test]
    fn untrusted_comparator_skips_unchanged_deep_subtrees() {
        let mut deep = json!("leaf");
        for _ in 0..200 {
            deep = json!({ "k": deep });
        }
        let old = json!({"x": 1, "deep": deep.clone()});
        let new = json!({"x": 2, "deep": deep});

        let flat = Comparator::untrusted().compare_json(&old, &new).unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["x"], ChangeRecord::modified(Scalar::Int(1), Scalar::Int(2)));
    }

    #[test]
    fn flat_json_renders_records() {
        let (old, new) = user_documents();
        let flat = Comparator::default().compare_json(&old, &new).unwrap();
        let rendered = flat_json(&flat).unwrap();
        assert_eq!(
            rendered["user/settings/notifications"],
            json!({"type": "modified", "old_value": true, "new_value": false})
        );
        assert_eq!(
            rendered["user/lastLogin"],
            json!({"type": "added", "new_value": "2025-03-20"})
        );
    }

    #[test]
    fn flat_json_rejects_opaque_values() {
        let old: Tree = [("o", Opaque::new(1u8))].into_iter().collect();
        let new: Tree = [("o", Opaque::new(1u8))].into_iter().collect();
        let flat = compare(&old, &new, &FlattenConfig::default());
        assert!(matches!(flat_json(&flat), Err(SdkError::Json(_))));
    }
}
