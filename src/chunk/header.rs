//! Two-byte header prefixed to every chunk on the wire.

use super::ChunkError;

/// Size of the chunk header in bytes.
pub const HEADER_BYTES: usize = 2;

/// Most chunks one message may occupy; the sequence counter is one byte.
pub const MAX_CHUNKS: u8 = u8::MAX;

/// Position of one chunk within its message.
///
/// `sequence` is 1-based; a chunk with `sequence == total` completes the
/// message it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
    total: u8,
    sequence: u8,
}

impl ChunkHeader {
    /// Create a header. Callers are expected to uphold
    /// `1 <= sequence <= total`; [`ChunkHeader::decode`] enforces it for
    /// untrusted input.
    #[must_use]
    pub const fn new(total: u8, sequence: u8) -> Self {
        debug_assert!(sequence >= 1 && sequence <= total);
        Self { total, sequence }
    }

    /// Total number of chunks in the message.
    #[must_use]
    pub const fn total(&self) -> u8 { self.total }

    /// 1-based position of this chunk.
    #[must_use]
    pub const fn sequence(&self) -> u8 { self.sequence }

    /// Whether this chunk completes its message.
    #[must_use]
    pub const fn is_final(&self) -> bool { self.sequence == self.total }

    /// Wire encoding of the header.
    #[must_use]
    pub const fn encode(&self) -> [u8; HEADER_BYTES] { [self.total, self.sequence] }

    /// Split an incoming packet into its header and payload.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::TruncatedPacket`] when the packet is shorter
    /// than the header, and [`ChunkError::InvalidHeader`] when the header
    /// violates `1 <= sequence <= total`.
    pub fn decode(packet: &[u8]) -> Result<(Self, &[u8]), ChunkError> {
        let [total, sequence, payload @ ..] = packet else {
            return Err(ChunkError::TruncatedPacket { length: packet.len() });
        };
        let (total, sequence) = (*total, *sequence);
        if total == 0 || sequence == 0 || sequence > total {
            return Err(ChunkError::InvalidHeader { total, sequence });
        }
        Ok((Self { total, sequence }, payload))
    }
}
