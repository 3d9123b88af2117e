use anyhow::Context;
use healthpoints::{Converter, Step};
use serde_json::Value;
use std::{env, fs};

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let export_path = args
        .next()
        .context("usage: healthpoints <export.json> [custom-properties.json]")?;
    let custom_properties = match args.next() {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let converter = Converter::new("health-export", custom_properties.as_deref());

    let raw: Value = serde_json::from_str(&fs::read_to_string(export_path)?)?;
    let payload = match raw {
        Value::Object(map) => Some(map),
        // Anything other than a JSON object is handed over as an absent
        // payload and dropped by the converter.
        _ => None,
    };

    for record in converter.apply(payload)? {
        println!("{}", Value::Object(record));
    }
    Ok(())
}
