//! Property tests for the content signature

use antisync_markup::signature;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

fn map_from(pairs: &[(String, String)]) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.clone(), Value::String(value.clone()));
    }
    Value::Object(map)
}

proptest! {
    #[test]
    fn insertion_order_does_not_matter(
        entries in prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,16}", 0..8)
    ) {
        let entries: BTreeMap<String, String> = entries;
        let forward: Vec<(String, String)> = entries.clone().into_iter().collect();
        let backward: Vec<(String, String)> = entries.into_iter().rev().collect();
        prop_assert_eq!(signature(&map_from(&forward)), signature(&map_from(&backward)));
    }

    #[test]
    fn sequence_order_matters(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assume!(format!("{a}{b}") != format!("{b}{a}"));
        prop_assert_ne!(signature(&json!([a, b])), signature(&json!([b, a])));
    }

    #[test]
    fn scalar_changes_are_detected(body in "[ -~]{0,32}", other in "[ -~]{0,32}") {
        prop_assume!(body != other);
        prop_assert_ne!(
            signature(&json!({"body": body, "series": []})),
            signature(&json!({"body": other, "series": []}))
        );
    }

    #[test]
    fn signature_is_hex_md5(body in ".{0,64}") {
        let sig = signature(&json!({"body": body}));
        prop_assert_eq!(sig.len(), 32);
        prop_assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
