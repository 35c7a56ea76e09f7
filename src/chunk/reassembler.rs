//! Inbound accumulator that stitches chunks back into messages.

use bytes::BytesMut;
use log::{debug, warn};

use super::{ChunkError, header::ChunkHeader};
use crate::message::Message;

/// Per-session chunk accumulator.
///
/// Exactly one reassembler exists per peer link, mutated only by that
/// session's receive path. Chunks are assumed to arrive in non-decreasing
/// sequence order from a single in-flight message; a regression is logged
/// but still appended, and an incomplete sequence that never resumes leaves
/// the buffer populated until the next completed cycle or a session reset.
#[derive(Debug, Default)]
pub struct ChunkReassembler {
    buffer: BytesMut,
    last_sequence: u8,
}

impl ChunkReassembler {
    /// Create an empty reassembler.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Feed one incoming packet.
    ///
    /// Returns `Ok(Some(_))` when the packet completes a message (the
    /// buffer is reset), `Ok(None)` while more chunks are expected.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::TruncatedPacket`] or
    /// [`ChunkError::InvalidHeader`] when the packet cannot be decoded; the
    /// buffer is left untouched so an in-flight message can still complete.
    pub fn push(&mut self, packet: &[u8]) -> Result<Option<Message>, ChunkError> {
        let (header, payload) = ChunkHeader::decode(packet)?;
        debug!(
            "chunk {}/{} carrying {} bytes",
            header.sequence(),
            header.total(),
            payload.len()
        );
        if header.sequence() <= self.last_sequence {
            warn!(
                "chunk sequence went backwards ({} after {}); appending anyway",
                header.sequence(),
                self.last_sequence
            );
        }

        self.buffer.extend_from_slice(payload);
        self.last_sequence = header.sequence();

        if header.is_final() {
            let complete = self.buffer.split().freeze();
            self.last_sequence = 0;
            return Ok(Some(Message::from(complete)));
        }
        Ok(None)
    }

    /// Bytes accumulated for the in-flight message.
    #[must_use]
    pub fn buffered_len(&self) -> usize { self.buffer.len() }

    /// Discard any partially assembled message.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_sequence = 0;
    }
}
