//! Error types for document writing

use thiserror::Error;

/// Errors raised while streaming markup to a sink
///
/// There is exactly one kind: the sink refused a write. The document in
/// progress is unrecoverable at that point; bytes already flushed stay
/// visible to whoever owns the sink.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}
