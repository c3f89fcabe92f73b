//! Crate-level error classification tests

use layerstack::{Error, LayeredMap, record};

use crate::helpers::*;

#[test]
fn test_error_modules() {
    let spec_err = record::create("class", "x", None, [("x", 1)]).unwrap_err();
    assert_eq!(spec_err.module(), "record");
    assert!(spec_err.is_specification_error());
    assert!(spec_err.is_record_error());
    assert!(!spec_err.is_not_found());

    let map = layered(vec![layer(&[("a", 1)])]);
    let lookup_err = map.get("b").unwrap_err();
    assert_eq!(lookup_err.module(), "layered");
    assert!(lookup_err.is_layered_error());
    assert!(!lookup_err.is_specification_error());
}

#[test]
fn test_error_kinds_are_distinct() {
    let empty = LayeredMap::new(vec![]).unwrap_err();
    assert!(empty.is_validation_error());
    assert!(!empty.is_type_error());

    let mut p = point_type().construct([1, 2]).unwrap();
    let index = p.get(9).unwrap_err();
    let immutable = p.set_field("x", 1).unwrap_err();
    let field = p.replace([("nope", 1)]).unwrap_err();

    assert!(index.is_index_error() && !index.is_immutability_error());
    assert!(immutable.is_immutability_error() && !immutable.is_type_error());
    assert!(field.is_type_error() && !field.is_index_error());
}

#[test]
fn test_error_messages() {
    let err: Error = record::create("Point", "x y", None, [("z", 0)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Default value for 'z' does not correspond to a declared field"
    );

    let err = point_type().construct([1, 2]).unwrap().set_field("y", 0).unwrap_err();
    assert_eq!(err.to_string(), "Point object is immutable");
}
