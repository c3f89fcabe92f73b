//! Concatenation of layer sequences

use layerstack::{Error, Layer, Value, layered::LayerError};

use crate::helpers::*;

#[test]
fn test_concat_appends_all_layers_of_other() {
    let left = layered(vec![layer(&[("a", 1)])]);
    let right = layered(vec![layer(&[("a", 2)]), layer(&[("b", 3)])]);

    let sum = left.concat(&right).unwrap();

    assert_eq!(sum.layer_count(), 3);
    assert_eq!(sum.layers()[0], layer(&[("a", 1)]));
    assert_resolves(&sum, &[("a", Value::Int(2)), ("b", Value::Int(3))]);
    // Operands are untouched
    assert_eq!(left.layer_count(), 1);
    assert_eq!(right.layer_count(), 2);
}

#[test]
fn test_concat_with_plain_mapping() {
    let map = layered(vec![layer(&[("a", 1)])]);

    let sum = map.concat(layer(&[("a", 9)])).unwrap();
    assert_eq!(*sum.get("a").unwrap(), 9);

    let reflected = map.concat_onto(layer(&[("a", 9)])).unwrap();
    assert_eq!(*reflected.get("a").unwrap(), 1);
    assert_eq!(reflected.layers()[0], layer(&[("a", 9)]));
}

#[test]
fn test_concat_rejects_empty_mapping() {
    let mut map = layered(vec![layer(&[("a", 1)])]);

    assert!(map.concat(Layer::new()).unwrap_err().is_validation_error());
    assert!(map.extend(Layer::new()).unwrap_err().is_validation_error());
    assert_eq!(map.layer_count(), 1);
}

#[test]
fn test_concat_rejects_non_mapping_values() {
    let mut map = layered(vec![layer(&[("a", 1)])]);

    let err = map.try_concat_value(&Value::Int(3)).unwrap_err();
    assert!(err.is_type_error());
    assert!(matches!(
        err,
        Error::Layered(LayerError::UnsupportedOperand { ref actual }) if actual == "int"
    ));
    assert!(map.try_concat_value_onto(&Value::from("x")).is_err());
    assert!(map.try_extend_value(&Value::Null).is_err());
    assert_eq!(map.layer_count(), 1);

    let sum = map
        .try_concat_value(&Value::Map(layer(&[("b", 2)])))
        .unwrap();
    assert_eq!(sum.len(), 2);
}

#[test]
fn test_extend_mutates_in_place() {
    let mut map = layered(vec![layer(&[("a", 1)])]);
    map.extend(layered(vec![layer(&[("b", 2)]), layer(&[("a", 3)])]))
        .unwrap();

    assert_eq!(map.layer_count(), 3);
    assert_resolves(&map, &[("a", Value::Int(3)), ("b", Value::Int(2))]);
}

#[test]
fn test_results_do_not_alias_operands() {
    let left = layered(vec![layer(&[("a", 1)])]);
    let right = layered(vec![layer(&[("b", 2)])]);

    let mut sum = left.concat(&right).unwrap();
    sum.set("a", 100);
    sum.set("b", 200);

    assert_eq!(*left.get("a").unwrap(), 1);
    assert_eq!(*right.get("b").unwrap(), 2);
}

#[test]
fn test_add_is_associative() {
    let a = layered(vec![layer(&[("k", 1), ("x", 1)])]);
    let b = layered(vec![layer(&[("k", 2)])]);
    let c = layered(vec![layer(&[("y", 3)]), layer(&[("x", 4)])]);

    let left = (&a + &b) + c.clone();
    let right = a.clone() + (&b + &c);

    assert_eq!(left.layers(), right.layers());
    assert_eq!(left, right);

    let mut accumulated = a.clone();
    accumulated += b;
    accumulated += c;
    assert_eq!(accumulated.layers(), left.layers());
}
