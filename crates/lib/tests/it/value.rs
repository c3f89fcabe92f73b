//! Value type tests: accessors, conversions, comparisons and textual forms

use layerstack::{Layer, Value};

use crate::helpers::*;

#[test]
fn test_value_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(42).type_name(), "int");
    assert_eq!(Value::Float(1.5).type_name(), "float");
    assert_eq!(Value::from("hello").type_name(), "text");
    assert_eq!(Value::List(vec![]).type_name(), "list");
    assert_eq!(Value::Map(Layer::new()).type_name(), "map");

    let p = point_type().construct([1, 2]).unwrap();
    assert_eq!(Value::from(p).type_name(), "Point");
}

#[test]
fn test_value_accessors() {
    let int_val = Value::from(42);
    let text_val = Value::from("hello");

    assert_eq!(int_val.as_int(), Some(42));
    assert_eq!(text_val.as_int(), None);
    assert_eq!(text_val.as_text(), Some("hello"));
    assert_eq!(Value::from(2.5).as_float(), Some(2.5));
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert!(Value::from(None::<i64>).is_null());
    assert!(Value::Map(layer(&[("a", 1)])).as_map().is_some());
}

#[test]
fn test_record_values_expose_fields() {
    let p = point_type().construct([1, 2]).unwrap();
    let mut value = Value::from(p);

    let fields = value.fields().expect("Records expose fields");
    assert_eq!(fields.field_names(), ["x", "y", "z"]);
    assert!(Value::Int(1).fields().is_none());

    let record = value.as_record_mut().unwrap();
    assert!(record.set_field("x", 5).is_err());
}

#[test]
fn test_value_primitive_comparisons() {
    assert!(Value::from("a") == "a");
    assert!("a" == Value::from("a"));
    assert!(Value::from(3) == 3);
    assert!(3i64 == Value::from(3));
    assert!(Value::from(true) == true);
    assert!(!(Value::from("3") == 3));
}

#[test]
fn test_value_repr() {
    assert_eq!(Value::Null.repr(), "None");
    assert_eq!(Value::Bool(false).repr(), "False");
    assert_eq!(Value::Float(3.0).repr(), "3.0");
    assert_eq!(Value::from("q").repr(), "'q'");
    assert_eq!(
        Value::Map(layer(&[("b", 2), ("a", 1)])).repr(),
        "{'a': 1, 'b': 2}"
    );
}

#[test]
fn test_value_serialization() {
    let p = point_type().construct([Value::from("A"), Value::from(1)]).unwrap();
    let json = serde_json::to_string(&Value::from(vec![Value::from(p), Value::Null])).unwrap();
    assert_eq!(json, r#"[{"x":"A","y":1,"z":0},null]"#);
}
