pub use convert::{ConvertError, Converter, GenericPayload};
pub use measurement::{Field, Measurement, Measurements};
pub use payload::{DataPoint, Metric, Payload, DATE_FORMAT};
pub use step::Step;

mod convert;
mod measurement;
mod payload;
mod step;
mod tags;
