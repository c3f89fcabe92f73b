//! Record type demonstration - generation, construction, replace and the assignment guard.

use layerstack::{RecordType, Value, record};
use serde_json::{Value as Json, json};

use crate::output::{OutputFormat, Report};

/// Run the records demonstration
pub fn run(format: OutputFormat) -> Result<(&'static str, Json), Box<dyn std::error::Error>> {
    let mut report = Report::new(format, "records");

    let point = record::create("Point", "x y z", None, [("z", 0)])?;
    report.step("type", &point, json!(point.fields()));

    let mut p = point.construct([Value::from("A"), Value::from(1)])?;
    report.step("construct", &p, serde_json::to_value(&p)?);
    report.step("index 2", p.get(2)?, serde_json::to_value(p.get(2)?)?);

    let made = point.make([Value::from("B"), Value::from(2), Value::from(3)])?;
    report.step("make", &made, serde_json::to_value(&made)?);

    if let Some(moved) = p.replace([("x", "C")])? {
        report.step("replace (immutable)", &moved, serde_json::to_value(&moved)?);
    }

    match p.set_field("x", "B") {
        Ok(()) => report.step("assign x", "accepted", json!(true)),
        Err(err) => report.step("assign x", &err, json!(err.to_string())),
    }

    let counter = RecordType::builder("Counter", "name, count")
        .mutable(true)
        .default("count", 0)
        .build()?;
    let mut hits = counter.construct(["hits"])?;
    hits.set_field("count", 1)?;
    hits.replace([("count", 2)])?;
    report.step("mutable record", &hits, serde_json::to_value(&hits)?);

    for bad in ["class", "2d"] {
        let no_defaults: [(&str, Value); 0] = [];
        if let Err(err) = record::create(bad, "x", None, no_defaults) {
            report.step(&format!("create {bad:?}"), &err, json!(err.to_string()));
        }
    }

    Ok(report.finish())
}
