use crate::convert::{Converter, GenericPayload};
use anyhow::Result;

// Invocation contract of the hosting pipeline. A step receives the current
// payload (possibly absent) and yields the payloads that continue downstream:
// zero to drop the message, one to replace it. Errors abort the message, not
// the pipeline.
pub trait Step {
    fn name(&self) -> &str;

    fn apply(&self, payload: Option<GenericPayload>) -> Result<Vec<GenericPayload>>;
}

impl Step for Converter {
    fn name(&self) -> &str {
        self.name()
    }

    fn apply(&self, payload: Option<GenericPayload>) -> Result<Vec<GenericPayload>> {
        let converted = self.convert(payload)?;
        Ok(converted.into_iter().collect())
    }
}
