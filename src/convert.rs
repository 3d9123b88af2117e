use crate::{
    measurement::{Field, Measurement, Measurements},
    payload::{DataPoint, Metric, Payload},
    tags::parse_custom_tags,
};
use chrono::{DateTime, FixedOffset};
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

// The untyped key/value record the hosting pipeline passes between steps.
pub type GenericPayload = Map<String, Value>;

// Failures after the payload has already decoded successfully. Unlike bad
// input, these indicate a fault in the converter itself and are propagated
// to the caller instead of being swallowed.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("error encoding measurements into a generic payload")]
    Encode(#[from] serde_json::Error),
    #[error("measurements encoded into a non-object value")]
    NotAnObject,
}

// Converts health-export payloads into time-series points. Constructed once
// per pipeline-step instance; immutable afterwards, so a single instance can
// serve concurrent calls.
pub struct Converter {
    name: String,
    custom_tags: HashMap<String, String>,
}

impl Converter {
    // Never fails: a bad custom-properties string degrades to no custom tags.
    pub fn new(name: impl Into<String>, custom_properties: Option<&str>) -> Self {
        let name = name.into();
        info!("custom properties for '{}': {:?}", name, custom_properties);
        let custom_tags = parse_custom_tags(custom_properties);
        info!("custom tags for '{}': {:?}", name, custom_tags);
        Self { name, custom_tags }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // One conversion call. Returns:
    // - Ok(None) for a missing payload or one that fails to decode (logged,
    //   nothing emitted downstream),
    // - Ok(Some(original)) for a present-but-empty payload,
    // - Ok(Some(converted)) with the encoded measurement list otherwise,
    // - Err(_) only for post-decode faults.
    pub fn convert(
        &self,
        payload: Option<GenericPayload>,
    ) -> Result<Option<GenericPayload>, ConvertError> {
        let payload = match payload {
            Some(payload) => payload,
            None => {
                error!("payload is missing");
                return Ok(None);
            }
        };
        if payload.is_empty() {
            warn!("payload is empty");
            return Ok(Some(payload));
        }

        let decoded: Payload = match serde_json::from_value(Value::Object(payload)) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("error decoding payload: {}", e);
                return Ok(None);
            }
        };
        debug!("payload decoded successfully");

        let measurements = self.build_measurements(&decoded.data.metrics);
        debug!(
            "built {} measurements from {} metrics",
            measurements.measurements.len(),
            decoded.data.metrics.len()
        );

        match serde_json::to_value(&measurements)? {
            Value::Object(encoded) => Ok(Some(encoded)),
            _ => Err(ConvertError::NotAnObject),
        }
    }

    fn build_measurements(&self, metrics: &[Metric]) -> Measurements {
        let mut measurements = vec![];
        for metric in metrics {
            let tags = self.tags_for(metric);
            for point in &metric.data {
                measurements.push(Measurement {
                    name: metric.name.clone(),
                    timestamp: point.date.timestamp(),
                    tags: tags.clone(),
                    fields: fields_for(point),
                });
            }
        }
        Measurements { measurements }
    }

    fn tags_for(&self, metric: &Metric) -> HashMap<String, String> {
        let mut tags = self.custom_tags.clone();
        // The metric's own units win over a colliding custom tag.
        tags.insert("units".to_string(), metric.units.clone());
        tags
    }
}

fn epoch_seconds(date: DateTime<FixedOffset>) -> f64 {
    date.timestamp() as f64
}

// Folds the sparse attribute set into the output field list. Declaration
// order is the canonical field order; absolute-timestamp attributes are
// stored as epoch seconds so they land in the numeric field space.
fn fields_for(point: &DataPoint) -> Vec<Field> {
    [
        ("qty", point.qty),
        ("max", point.max),
        ("min", point.min),
        ("avg", point.avg),
        ("deep", point.deep),
        ("inBedEnd", point.in_bed_end.map(epoch_seconds)),
        ("asleep", point.asleep),
        ("core", point.core),
        ("rem", point.rem),
        ("inBedStart", point.in_bed_start.map(epoch_seconds)),
        ("sleepStart", point.sleep_start.map(epoch_seconds)),
        ("sleepEnd", point.sleep_end.map(epoch_seconds)),
        ("inBed", point.in_bed.map(epoch_seconds)),
        ("awake", point.awake),
        ("diastolic", point.diastolic),
        ("systolic", point.systolic),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| Field { name, value }))
    .collect()
}
