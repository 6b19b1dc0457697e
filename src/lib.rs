pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod process;
pub mod telemetry;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use error::{Error, Result};
pub use format::{Formatter, Record, format_data};
pub use process::{Processor, process_data};
pub use validate::{NonEmpty, Validate, is_non_empty, validate_non_empty};
