//! Errors produced by the chunk codec.
//!
//! All variants are local to one message; the session that hit them stays
//! usable.

use thiserror::Error;

use super::header::MAX_CHUNKS;

/// Failure modes of chunk splitting, decoding, and delivery.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The negotiated MTU cannot fit a header and at least one payload byte.
    #[error("mtu {mtu} leaves no room for a chunk payload")]
    MtuTooSmall { mtu: u32 },
    /// The message would need more chunks than the one-byte counter allows.
    #[error("message needs {required} chunks but the sequence counter caps at {}", MAX_CHUNKS)]
    TooManyChunks { required: usize },
    /// An incoming packet is shorter than the chunk header.
    #[error("packet of {length} bytes is shorter than the chunk header")]
    TruncatedPacket { length: usize },
    /// An incoming header violates `1 <= sequence <= total`.
    #[error("invalid chunk header: total {total}, sequence {sequence}")]
    InvalidHeader { total: u8, sequence: u8 },
    /// A chunk could not be delivered within the retry budget.
    #[error("chunk {sequence} still undelivered after retries")]
    SendRetriesExhausted { sequence: u8 },
}
