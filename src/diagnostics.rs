use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Destination for non-fatal warnings raised while formatting.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}

/// Keeps every warning in memory so it can be inspected afterwards.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
