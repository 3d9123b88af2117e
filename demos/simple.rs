use healthpoints::{ConvertError, Converter};
use serde_json::{json, Value};

fn main() -> Result<(), ConvertError> {
    let converter = Converter::new("health-export", Some(r#"{"tags": {"host": "home"}}"#));

    let payload = match json!({
        "data": {
            "metrics": [
                {
                    "name": "weight_body_mass",
                    "units": "kg",
                    "data": [
                        {"date": "2024-01-01 07:30:00 +0000", "qty": 70.5},
                        {"date": "2024-01-02 07:30:00 +0000", "qty": 70.3}
                    ]
                },
                {
                    "name": "heart_rate",
                    "units": "count/min",
                    "data": [
                        {"date": "2024-01-01 08:00:00 +0000", "Min": 58.0, "Max": 91.0, "Avg": 64.0}
                    ]
                }
            ]
        }
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    match converter.convert(Some(payload))? {
        Some(record) => println!("{}", Value::Object(record)),
        None => println!("payload dropped"),
    }
    Ok(())
}
