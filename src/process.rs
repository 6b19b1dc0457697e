use crate::{
    diagnostics::{DiagnosticSink, TracingSink},
    error::{Error, Result},
    format::Record,
};
use serde_json::Value;
use tracing::debug;

pub const EMPTY_DATA_WARNING: &str = "Empty data provided";

/// Drops `null`-valued fields from a record.
#[derive(Debug, Clone, Default)]
pub struct Processor<S = TracingSink> {
    sink: S,
}

impl<S: DiagnosticSink> Processor<S> {
    #[inline]
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Copy `data` without its top-level `null` fields.
    ///
    /// Nested `null`s are kept. Key order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyData` if `data` is absent or has no fields.
    pub fn try_process(&self, data: Option<&Record>) -> Result<Record> {
        let data = data.filter(|d| !d.is_empty()).ok_or(Error::EmptyData)?;
        let kept = data
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Record>();
        debug!(fields = data.len(), kept = kept.len(), "processed record");
        Ok(kept)
    }

    /// Like [`Processor::try_process`], but warns through the sink and
    /// returns `None` on empty input.
    #[must_use]
    pub fn process(&self, data: Option<&Record>) -> Option<Record> {
        self.try_process(data)
            .inspect_err(|_| self.sink.warn(EMPTY_DATA_WARNING))
            .ok()
    }

    /// Accepts any JSON value; only a non-empty object is processed.
    #[must_use]
    pub fn process_value(&self, data: Option<&Value>) -> Option<Record> {
        self.process(data.and_then(Value::as_object))
    }
}

/// Drop `null` fields from `data`, warning through `tracing` when it is empty.
#[must_use]
pub fn process_data(data: Option<&Record>) -> Option<Record> {
    Processor::<TracingSink>::default().process(data)
}
