use nestdiff_flatten::{flatten_with, FlattenConfig};
use nestdiff_types::{Scalar, Tree, Value};
use proptest::prelude::*;

fn value() -> impl Strategy<Value = Value> {
    any::<i64>()
        .prop_map(|n| Value::Scalar(Scalar::Int(n)))
        .prop_recursive(4, 48, 6, |inner| {
            prop::collection::vec(("[a-z]{1,3}", inner), 0..6)
                .prop_map(|entries| Value::Map(entries.into_iter().collect()))
        })
}

fn tree() -> impl Strategy<Value = Tree> {
    prop::collection::vec(("[a-z]{1,3}", value()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn leaves(tree: &Tree) -> usize {
    tree.iter()
        .map(|(_, value)| match value {
            Value::Scalar(_) => 1,
            Value::Map(inner) => leaves(inner),
        })
        .sum()
}

proptest! {
    // Keys never contain the separator, so no two leaves can collide.
    #[test]
    fn every_leaf_gets_its_own_path(t in tree()) {
        let flat = flatten_with(&t, &FlattenConfig::default().with_separator("."));
        prop_assert_eq!(flat.len(), leaves(&t));
    }

    #[test]
    fn prefix_is_prepended_to_every_path(t in tree(), prefix in "[A-Z]{1,4}") {
        let config = FlattenConfig::default().with_prefix(prefix.clone());
        let bare = flatten_with(&t, &FlattenConfig::default());
        let prefixed = flatten_with(&t, &config);

        prop_assert_eq!(bare.len(), prefixed.len());
        for ((bare_key, bare_leaf), (key, leaf)) in bare.iter().zip(prefixed.iter()) {
            prop_assert_eq!(key, &format!("{prefix}/{bare_key}"));
            prop_assert_eq!(leaf, bare_leaf);
        }
    }
}
