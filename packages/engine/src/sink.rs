//! Completion-record delivery.

use thiserror::Error;

use crate::types::CompletionRecord;

/// Failure reported by a [`ResultSink`]. The engine logs it and moves on; a
/// drill in progress is never aborted by a persistence hiccup.
#[derive(Debug, Error)]
#[error("result sink failure: {0}")]
pub struct SinkError(pub String);

/// Destination for the one completion record a finished drill emits.
///
/// The caller supplies the implementation: an HTTP client posting to the
/// results endpoint, a test buffer, whatever fits. Delivery is
/// fire-and-forget and the engine never retries.
pub trait ResultSink {
    fn record(&mut self, record: &CompletionRecord) -> Result<(), SinkError>;
}
