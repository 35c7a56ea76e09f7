//! Canonical error and failure-report types for the crate.

use thiserror::Error;

use crate::{chunk::ChunkError, frame::FrameError, session::SessionError};

/// Top-level error type exposed by `nearlink`.
#[derive(Debug, Error)]
pub enum NearlinkError {
    /// The stream framing codec failed.
    #[error("framing: {0}")]
    Frame(#[from] FrameError),
    /// The chunk codec failed.
    #[error("chunking: {0}")]
    Chunk(#[from] ChunkError),
    /// A session lifecycle rule was violated.
    #[error("session: {0}")]
    Session(#[from] SessionError),
}

/// Reason a message failed to decode, carried by
/// [`SessionEvent::DecodeFailed`](crate::session::SessionEvent).
#[derive(Debug, Error)]
pub enum DecodeFailure {
    /// A stream frame could not be decoded.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// A notification packet could not be decoded.
    #[error(transparent)]
    Chunk(#[from] ChunkError),
}

impl DecodeFailure {
    /// Whether the failure took the session down rather than just the
    /// message.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Frame(error) => error.is_fatal(),
            Self::Chunk(_) => false,
        }
    }
}
