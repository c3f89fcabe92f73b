//! Construction, lookup, mutation and iteration tests

use layerstack::{Error, Layer, LayeredMap, Value, layered::LayerError};

use crate::helpers::*;

// ===== CONSTRUCTION =====

#[test]
fn test_new_requires_non_empty_layers() {
    let err = LayeredMap::new(Vec::<Layer>::new()).unwrap_err();
    assert!(err.is_validation_error());
    assert!(matches!(err, Error::Layered(LayerError::NoLayers)));

    let err = LayeredMap::new([layer(&[("a", 1)]), Layer::new()]).unwrap_err();
    assert!(matches!(
        err,
        Error::Layered(LayerError::EmptyLayer { index: 1 })
    ));
}

#[test]
fn test_from_values_rejects_non_mappings() {
    let err = LayeredMap::from_values([Value::Map(layer(&[("a", 1)])), Value::from("a")])
        .unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(
        err.to_string(),
        "Layer 1 is not a mapping (found text)"
    );

    let map = LayeredMap::from_values([Value::Map(layer(&[("a", 1)]))]).unwrap();
    assert_eq!(map.layer_count(), 1);
}

// ===== LOOKUP =====

#[test]
fn test_later_layers_shadow_earlier_ones() {
    let map = layered(vec![layer(&[("c1", "AAA")]), layer(&[("c1", "BBB")])]);

    assert_eq!(*map.get("c1").unwrap(), "BBB");
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("c1"));
    assert!(!map.contains_key("c2"));
}

#[test]
fn test_get_missing_key() {
    let map = layered(vec![layer(&[("a", 1)])]);

    let err = map.get("b").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Key 'b' does not exist");
}

#[test]
fn test_truthiness_counts_layers_not_keys() {
    let single = layered(vec![layer(&[("a", 1), ("b", 2), ("c", 3)])]);
    let double = layered(vec![layer(&[("a", 1)]), layer(&[("a", 2)])]);

    assert!(!single.is_truthy());
    assert_eq!(single.len(), 3);
    assert!(double.is_truthy());
    assert_eq!(double.len(), 1);
}

// ===== SET =====

#[test]
fn test_set_scenario() {
    let mut map = layered(vec![layer(&[("c1", "AAA")])]);

    assert_eq!(map.set("c1", "FFFF"), Some(Value::from("AAA")));
    assert_eq!(map.set("c3", "GGGG"), None);

    assert_eq!(
        map.layers(),
        [layer(&[("c1", "FFFF")]), layer(&[("c3", "GGGG")])]
    );
    assert_eq!(map.len(), 2);
}

#[test]
fn test_set_existing_key_writes_only_the_top_defining_layer() {
    let mut map = layered(vec![
        layer(&[("a", 1), ("b", 1)]),
        layer(&[("a", 2)]),
        layer(&[("c", 3)]),
    ]);

    map.set("a", 20);

    assert_eq!(map.layer_count(), 3);
    assert_eq!(map.layers()[0], layer(&[("a", 1), ("b", 1)]));
    assert_eq!(map.layers()[1], layer(&[("a", 20)]));
    assert_eq!(*map.get("a").unwrap(), 20);
}

// ===== DELETE =====

#[test]
fn test_delete_prunes_emptied_layers() {
    let mut map = layered(vec![layer(&[("a", 1)]), layer(&[("a", 2), ("b", 3)])]);

    assert_eq!(map.delete("a").unwrap(), Value::Int(2));

    assert_eq!(map.layers(), [layer(&[("b", 3)])]);
    assert!(!map.contains_key("a"));
}

#[test]
fn test_delete_missing_key_changes_nothing() {
    let mut map = layered(vec![layer(&[("a", 1)]), layer(&[("b", 2)])]);
    let before = map.layers().to_vec();

    let err = map.delete("zzz").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(map.layers(), before.as_slice());
}

// ===== ITERATION =====

#[test]
fn test_keys_group_by_shadowing_layer() {
    let map = layered(vec![
        layer(&[("d", 1), ("a", 1)]),
        layer(&[("c", 2), ("b", 2)]),
        layer(&[("d", 3)]),
    ]);

    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["d", "b", "c", "a"]);

    let via_into_iter: Vec<&str> = (&map).into_iter().collect();
    assert_eq!(via_into_iter, keys);
}

#[test]
fn test_iter_yields_visible_values() {
    let map = layered(vec![layer(&[("a", 1), ("b", 1)]), layer(&[("a", 2)])]);

    let pairs: Vec<(&str, &Value)> = map.iter().collect();
    assert_eq!(pairs, vec![("a", &Value::Int(2)), ("b", &Value::Int(1))]);
}

#[test]
fn test_display_lists_layers() {
    let map = layered(vec![layer(&[("a", 1)]), layer(&[("b", "x")])]);
    assert_eq!(map.to_string(), "LayeredMap({'a': 1}, {'b': 'x'})");
}

#[test]
fn test_serializes_as_layer_sequence() {
    let map = layered(vec![layer(&[("a", 1)]), layer(&[("b", "x")])]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"[{"a":1},{"b":"x"}]"#);
}
