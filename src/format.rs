use crate::{
    clock::{Clock, SystemClock, format_timestamp},
    diagnostics::{DiagnosticSink, TracingSink},
    error::{Error, Result},
};
use serde_json::{Map, Value};
use tracing::debug;

/// Open-ended record: ordered string keys mapped to arbitrary JSON values.
pub type Record = Map<String, Value>;

pub const PROCESSED_KEY: &str = "processed";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const INVALID_DATA_WARNING: &str = "Invalid data provided";

/// Tags records with a `processed` flag and a per-record capture time.
///
/// The clock and the warning sink are injected so callers (and tests) control
/// both the timestamps and where the invalid-input warning ends up.
#[derive(Debug, Clone, Default)]
pub struct Formatter<C = SystemClock, S = TracingSink> {
    clock: C,
    sink: S,
}

impl<C: Clock, S: DiagnosticSink> Formatter<C, S> {
    #[inline]
    #[must_use]
    pub const fn new(clock: C, sink: S) -> Self {
        Self { clock, sink }
    }

    /// Format `input`, or report why it cannot be formatted.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `input` is absent, `null` or anything
    /// other than an array.
    pub fn try_format(&self, input: Option<&Value>) -> Result<Vec<Record>> {
        match input {
            Some(Value::Array(items)) => {
                debug!(items = items.len(), "formatting records");
                Ok(items.iter().map(|item| self.format_item(item)).collect())
            }
            other => Err(Error::invalid_input(value_kind(other))),
        }
    }

    /// Format `input`, falling back to an empty result on invalid input.
    ///
    /// Invalid input never fails the call: a warning goes to the sink and an
    /// empty vector is returned.
    #[must_use]
    pub fn format(&self, input: Option<&Value>) -> Vec<Record> {
        self.try_format(input).unwrap_or_else(|err| {
            debug!(%err, "rejecting formatter input");
            self.sink.warn(INVALID_DATA_WARNING);
            Vec::new()
        })
    }

    /// Format records the caller already holds as maps.
    #[must_use]
    pub fn format_records(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .map(|record| self.stamp(record.clone()))
            .collect()
    }

    /// Shallow-copy a single item and add the reserved fields.
    ///
    /// Objects contribute their fields, arrays and strings contribute one
    /// field per element keyed by index, other scalars contribute nothing.
    #[must_use]
    pub fn format_item(&self, item: &Value) -> Record {
        self.stamp(spread(item))
    }

    fn stamp(&self, mut record: Record) -> Record {
        record.insert(PROCESSED_KEY.into(), Value::Bool(true));
        record.insert(
            TIMESTAMP_KEY.into(),
            Value::String(format_timestamp(self.clock.now())),
        );
        record
    }
}

/// Format `input` with the wall clock, warning through `tracing` on invalid
/// input.
#[must_use]
pub fn format_data(input: Option<&Value>) -> Vec<Record> {
    Formatter::<SystemClock, TracingSink>::default().format(input)
}

fn spread(item: &Value) -> Record {
    match item {
        Value::Object(fields) => fields.clone(),
        Value::Array(elements) => elements
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Record::new(),
    }
}

const fn value_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
