//! Error types for compilation

use thiserror::Error;

/// Errors that can occur while compiling a document to KV markup.
///
/// Only contract violations of the document itself surface here. Data-level
/// anomalies (a widget whose type tag has no registered conversion rule) are
/// absorbed into the output text as diagnostic comment lines and never abort
/// a compilation.
#[derive(Error, Debug)]
pub enum CompileError {
    /// Two widgets in the document share an id. Ids come from a monotonic
    /// per-session counter and must never repeat, so this is a producer bug
    /// with no well-defined partial output.
    #[error("duplicate widget id: {id}")]
    DuplicateWidgetId { id: String },
}
