use layerstack::{Layer, LayeredMap, RecordType, Value};

/// Build a layer from `(key, value)` pairs
pub fn layer<V: Into<Value> + Clone>(entries: &[(&str, V)]) -> Layer {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone().into()))
        .collect()
}

/// Build a layered map from layers, panicking on invalid input
pub fn layered(layers: Vec<Layer>) -> LayeredMap {
    LayeredMap::new(layers).expect("Failed to create layered map")
}

/// The `Point(x, y, z=0)` immutable record type
pub fn point_type() -> RecordType {
    RecordType::builder("Point", "x y z")
        .default("z", 0)
        .build()
        .expect("Failed to create Point type")
}

/// A mutable `Counter(name, count=0)` record type
pub fn counter_type() -> RecordType {
    RecordType::builder("Counter", vec!["name", "count"])
        .mutable(true)
        .default("count", 0)
        .build()
        .expect("Failed to create Counter type")
}

/// Assert that the map's visible values match `expected` exactly
pub fn assert_resolves(map: &LayeredMap, expected: &[(&str, Value)]) {
    assert_eq!(map.len(), expected.len(), "Distinct key count mismatch");
    for (key, value) in expected {
        match map.get(key) {
            Ok(actual) => assert_eq!(actual, value, "Value mismatch for key '{key}'"),
            Err(err) => panic!("Key '{key}' not found in map: {err}"),
        }
    }
}
