use serde::Serialize;
use std::collections::HashMap;

// Wrapper matching the wire shape expected downstream:
// {"measurements": [...]}.
#[derive(Debug, Serialize, PartialEq)]
pub struct Measurements {
    pub measurements: Vec<Measurement>,
}

// One output time-series point.
#[derive(Debug, Serialize, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub timestamp: i64,
    pub tags: HashMap<String, String>,
    pub fields: Vec<Field>,
}

// Field names come from the fixed attribute list of the export schema,
// so a static str is enough.
#[derive(Debug, Serialize, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: f64,
}
