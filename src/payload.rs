use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

// Dates in the export are absolute timestamps like "2024-01-01 00:00:00 +0000".
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Deserialize)]
pub struct Payload {
    pub data: Data,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub metrics: Vec<Metric>,
    // Sections the converter receives but never reads. Kept opaque so a
    // payload carrying them still decodes.
    #[serde(default)]
    pub workouts: Vec<Value>,
    #[serde(default)]
    pub ecg: Vec<Value>,
    #[serde(default, rename = "heartRateNotifications")]
    pub heart_rate_notifications: Vec<Value>,
    #[serde(default)]
    pub symptoms: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Metric {
    pub name: String,
    pub units: String,
    pub data: Vec<DataPoint>,
}

// One sample within a metric. Everything except `date` is optional; which
// attributes show up depends on the metric kind. Absent means absent, never
// zero. The bed/sleep attributes are absolute timestamps in the same format
// as `date`.
#[derive(Debug, Deserialize)]
pub struct DataPoint {
    #[serde(with = "export_date")]
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub qty: Option<f64>,
    #[serde(default, rename = "Max")]
    pub max: Option<f64>,
    #[serde(default, rename = "Min")]
    pub min: Option<f64>,
    #[serde(default, rename = "Avg")]
    pub avg: Option<f64>,
    #[serde(default)]
    pub deep: Option<f64>,
    #[serde(default, rename = "inBedEnd", with = "export_date_opt")]
    pub in_bed_end: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub asleep: Option<f64>,
    #[serde(default)]
    pub core: Option<f64>,
    #[serde(default)]
    pub rem: Option<f64>,
    #[serde(default, rename = "inBedStart", with = "export_date_opt")]
    pub in_bed_start: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "sleepStart", with = "export_date_opt")]
    pub sleep_start: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "sleepEnd", with = "export_date_opt")]
    pub sleep_end: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "inBed", with = "export_date_opt")]
    pub in_bed: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub awake: Option<f64>,
    #[serde(default)]
    pub diastolic: Option<f64>,
    #[serde(default)]
    pub systolic: Option<f64>,
    #[serde(default, rename = "Unspecified")]
    pub unspecified: Option<String>,
    #[serde(default, rename = "Protection Used")]
    pub protection_used: Option<String>,
    #[serde(default, rename = "Protection Not Used")]
    pub protection_not_used: Option<String>,
}

mod export_date {
    use super::DATE_FORMAT;
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, DATE_FORMAT).map_err(de::Error::custom)
    }
}

mod export_date_opt {
    use super::DATE_FORMAT;
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => DateTime::parse_from_str(&raw, DATE_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
