//! Errors reported while framing or deframing stream messages.

use thiserror::Error;

/// Failure modes of the length-framed stream codec.
///
/// Only [`FrameError::Io`] is fatal for the session; the other variants
/// abandon the current message and leave the stream open.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The declared payload length exceeds the allocation ceiling.
    #[error("declared length {length} exceeds the {limit}-byte limit")]
    Oversized { length: usize, limit: usize },
    /// The delimiter sentinel did not match; the frame is corrupt.
    #[error("wrong delimiter {found:?}; corrupted message")]
    CorruptDelimiter { found: [u8; 2] },
    /// A payload page stayed short after the per-page retry budget.
    #[error("page {page} incomplete after retries: expected {expected} bytes, got {got}")]
    IncompleteRead {
        page: usize,
        expected: usize,
        got: usize,
    },
    /// The underlying stream failed.
    #[error("stream I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl FrameError {
    /// Whether the error ends the session rather than just this message.
    #[must_use]
    pub const fn is_fatal(&self) -> bool { matches!(self, Self::Io(_)) }
}
