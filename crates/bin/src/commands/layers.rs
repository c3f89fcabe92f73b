//! Layered map demonstration - shadowing, set, delete, decompose and concatenation.

use layerstack::{Layer, LayeredMap, RecordType, Value};
use serde_json::{Value as Json, json};

use crate::output::{OutputFormat, Report};

fn single(key: &str, value: impl Into<Value>) -> Layer {
    Layer::from([(key.to_string(), value.into())])
}

/// Run the layered map demonstration
pub fn run(format: OutputFormat) -> Result<(&'static str, Json), Box<dyn std::error::Error>> {
    let mut report = Report::new(format, "layers");

    let shadowed = LayeredMap::new([single("c1", "AAA"), single("c1", "BBB")])?;
    report.step("shadowed", &shadowed, serde_json::to_value(&shadowed)?);
    report.step("get c1", shadowed.get("c1")?, json!(shadowed.get("c1")?.to_string()));

    let mut d = LayeredMap::from_layer(single("c1", "AAA"))?;
    report.step("truthy (1 layer)", d.is_truthy(), json!(d.is_truthy()));
    d.set("c1", "FFFF");
    d.set("c3", "GGGG");
    report.step("after set", &d, serde_json::to_value(&d)?);
    report.step("len", d.len(), json!(d.len()));
    report.step("truthy (2 layers)", d.is_truthy(), json!(d.is_truthy()));

    let mut pruned = LayeredMap::new([
        single("a", 1),
        Layer::from([("a".to_string(), Value::from(2)), ("b".to_string(), Value::from(3))]),
    ])?;
    pruned.delete("a")?;
    report.step("after delete a", &pruned, serde_json::to_value(&pruned)?);

    let point = RecordType::builder("Point", "x y").build()?;
    let points = LayeredMap::new([
        single("p", point.construct([1, 2])?),
        single("p", point.construct([3, 4])?),
    ])?;
    let parts = points.decompose("p")?;
    let parts_text: Vec<String> = parts
        .iter()
        .map(|fields| Value::from(fields.clone()).repr())
        .collect();
    report.step("decompose p", parts_text.join(" "), serde_json::to_value(&parts)?);

    let sum = shadowed.concat(&d)?;
    report.step("concat", &sum, serde_json::to_value(&sum)?);
    let reflected = d.concat_onto(single("c9", true))?;
    report.step("concat onto", &reflected, serde_json::to_value(&reflected)?);
    let keys: Vec<&str> = sum.keys().collect();
    report.step("keys", keys.join(", "), json!(keys));
    let flat = Layer::from([
        ("c1".to_string(), Value::from("FFFF")),
        ("c3".to_string(), Value::from("GGGG")),
    ]);
    let equal = d == flat;
    report.step("equal to mapping", equal, json!(equal));

    if let Err(err) = d.try_concat_value(&Value::from(5)) {
        report.step("concat int", &err, json!(err.to_string()));
    }

    Ok(report.finish())
}
