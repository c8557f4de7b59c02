//! Engine error taxonomy.
//!
//! Only fatal construction errors surface to the caller. Degraded sampling
//! resolves locally by accepting fewer candidates, and sink failures are
//! logged and swallowed, so neither appears here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A drill cannot start without at least one item.
    #[error("cannot start a drill over an empty item list")]
    InvalidInput,
}
