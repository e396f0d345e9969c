use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};
use crate::key::Key;
use crate::value::Value;

/// An insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Iteration follows insertion order. Inserting into an occupied slot
/// replaces the value but keeps the slot's original position, so aliasing
/// keys (see [`Key`]) resolve last-write-wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tree(IndexMap<Key, Value>);

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// A tree holding exactly one entry.
    pub fn singleton(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let mut tree = Self::with_capacity(1);
        tree.insert(key, value);
        tree
    }

    /// Insert an entry, returning the value previously stored under the
    /// same canonical key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value by canonical key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the canonical key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, Key, Value> {
        self.0.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Parse a tree from JSON text. The root must be an object or array.
    pub fn from_json_str(s: &str) -> TypeResult<Self> {
        let json: serde_json::Value =
            serde_json::from_str(s).map_err(|e| TypeError::Json(e.to_string()))?;
        Self::try_from(json)
    }
}

impl TryFrom<serde_json::Value> for Tree {
    type Error = TypeError;

    fn try_from(json: serde_json::Value) -> TypeResult<Self> {
        match Value::from(json) {
            Value::Map(tree) => Ok(tree),
            Value::Scalar(s) => Err(TypeError::NotAMapping {
                found: s.type_name(),
            }),
        }
    }
}

impl TryFrom<&serde_json::Value> for Tree {
    type Error = TypeError;

    fn try_from(json: &serde_json::Value) -> TypeResult<Self> {
        match Value::from(json) {
            Value::Map(tree) => Ok(tree),
            Value::Scalar(s) => Err(TypeError::NotAMapping {
                found: s.type_name(),
            }),
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for (k, v) in iter {
            tree.insert(k, v);
        }
        tree
    }
}

impl From<IndexMap<Key, Value>> for Tree {
    fn from(map: IndexMap<Key, Value>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Tree {
    type Item = (Key, Value);
    type IntoIter = IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Tree::try_from(json).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_insertion_order() {
        let tree = Tree::try_from(json!({"z": 1, "a": 2, "m": 3})).unwrap();
        let keys: Vec<&str> = tree.keys().map(Key::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn aliasing_keys_are_last_write_wins() {
        let mut tree = Tree::new();
        tree.insert(1, "int");
        tree.insert("x", "other");
        let previous = tree.insert(true, "bool");

        assert_eq!(previous, Some(Value::from("int")));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("1"), Some(&Value::from("bool")));
        // Position of the first insertion is kept.
        assert_eq!(tree.keys().next(), Some(&Key::from("1")));
    }

    #[test]
    fn null_and_empty_string_share_a_slot() {
        let tree: Tree = vec![(Key::null(), "first"), (Key::from(""), "second")]
            .into_iter()
            .collect();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(""), Some(&Value::from("second")));
    }

    #[test]
    fn scalar_root_is_rejected() {
        assert_eq!(
            Tree::try_from(json!("text")),
            Err(TypeError::NotAMapping { found: "string" })
        );
        assert_eq!(
            Tree::try_from(json!(null)),
            Err(TypeError::NotAMapping { found: "null" })
        );
        assert!(Tree::try_from(json!([1, 2])).is_ok());
    }

    #[test]
    fn borrowed_json_keeps_the_document() {
        let json = json!({"b": [true], "a": {"c": "x"}});
        let tree = Tree::try_from(&json).unwrap();
        assert_eq!(tree, Tree::try_from(json.clone()).unwrap());
        assert!(tree.contains_key("b") && !tree.is_empty());
        assert_eq!(
            Tree::try_from(&json!(2.5)),
            Err(TypeError::NotAMapping { found: "float" })
        );
    }

    #[test]
    fn from_json_str_reports_parse_errors() {
        assert!(matches!(Tree::from_json_str("{"), Err(TypeError::Json(_))));
        let tree = Tree::from_json_str(r#"{"a": {"b": true}}"#).unwrap();
        assert!(tree.get("a").is_some_and(Value::is_map));
    }

    #[test]
    fn deserialize_requires_mapping_root() {
        let tree: Tree = serde_json::from_str(r#"{"k": [1]}"#).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(serde_json::from_str::<Tree>("42").is_err());
    }

    #[test]
    fn serde_roundtrip_through_json() {
        let source = json!({"user": {"name": "John", "tags": {"0": "a"}}, "n": 1.5});
        let tree = Tree::try_from(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&tree).unwrap(), source);
    }
}
