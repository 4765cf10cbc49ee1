//! Error types for path categorization and hashing

use thiserror::Error;

/// Errors that can occur while computing category codes or lookup keys
///
/// All variants are input-validation failures. None of them are worth
/// retrying: a malformed input stays malformed, so each carries the
/// offending text for diagnostics and propagates to the caller.
#[derive(Debug, Error)]
pub enum SqPathError {
    /// A numbered-category path did not have a digit or separator at a
    /// required offset
    #[error("malformed path {path:?}: expected digit or separator at byte {offset}")]
    MalformedPath {
        /// The path that failed to parse
        path: String,
        /// Byte offset of the first offending position
        offset: usize,
    },

    /// The path had no `/`, so no folder component can be hashed
    #[error("invalid path {0:?}: missing directory separator")]
    InvalidPath(String),

    /// Extended-hash input contained a non-ASCII code point
    #[error("non-ASCII input cannot be hashed: {0:?}")]
    NonAsciiInput(String),

    /// An upload payload failed to decode
    #[error("invalid upload payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl SqPathError {
    pub(crate) fn malformed(path: &str, offset: usize) -> Self {
        Self::MalformedPath {
            path: path.to_string(),
            offset,
        }
    }
}
