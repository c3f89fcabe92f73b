//! Equality against other layered maps, plain mappings and dynamic values

use layerstack::{Layer, Value};

use crate::helpers::*;

#[test]
fn test_equality_compares_resolved_values() {
    let stacked = layered(vec![layer(&[("a", 0), ("b", 2)]), layer(&[("a", 1)])]);
    let flat = layered(vec![layer(&[("a", 1), ("b", 2)])]);

    assert_eq!(stacked, flat);
    assert_eq!(flat, stacked);
    assert_eq!(stacked, stacked.clone());
}

#[test]
fn test_equality_detects_differences() {
    let base = layered(vec![layer(&[("a", 1), ("b", 2)])]);

    assert_ne!(base, layered(vec![layer(&[("a", 1)])]));
    assert_ne!(base, layered(vec![layer(&[("a", 1), ("b", 3)])]));
    assert_ne!(base, layered(vec![layer(&[("a", 1), ("c", 2)])]));
}

#[test]
fn test_equality_compares_numbers_by_value() {
    let ints = layered(vec![layer(&[("a", 1), ("b", 0)])]);
    let mixed = layered(vec![layer(&[("a", Value::from(1.0)), ("b", Value::from(false))])]);

    assert_eq!(ints, mixed);
    assert_ne!(ints, layered(vec![layer(&[("a", Value::from("1")), ("b", Value::from(0))])]));
}

#[test]
fn test_equality_with_plain_mapping_is_symmetric() {
    let map = layered(vec![layer(&[("a", 0)]), layer(&[("a", 1), ("b", 2)])]);
    let plain = layer(&[("a", 1), ("b", 2)]);

    assert!(map == plain);
    assert!(plain == map);
    assert!(map != layer(&[("a", 1)]));
    assert!(map != layer(&[("a", 0), ("b", 2)]));
}

#[test]
fn test_equality_with_dynamic_values() {
    let map = layered(vec![layer(&[("a", 1)])]);

    assert!(map.equals_value(&Value::Map(layer(&[("a", 1)]))));
    assert!(!map.equals_value(&Value::Map(Layer::new())));
    assert!(!map.equals_value(&Value::Int(1)));
    assert!(!map.equals_value(&Value::from(vec![Value::from("a")])));
}
