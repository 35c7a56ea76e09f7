//! Outbound helper that splits messages into MTU-bounded chunks.

use bytes::{BufMut, Bytes, BytesMut};

use super::{
    ChunkError,
    header::{ChunkHeader, HEADER_BYTES, MAX_CHUNKS},
};
use crate::message::Message;

/// Header and payload of a single outbound chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    header: ChunkHeader,
    payload: Bytes,
}

impl Chunk {
    /// Return the chunk header.
    #[must_use]
    pub const fn header(&self) -> ChunkHeader { self.header }

    /// Return the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_ref() }

    /// Wire encoding: header followed by payload.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut packet = BytesMut::with_capacity(HEADER_BYTES + self.payload.len());
        packet.put_slice(&self.header.encode());
        packet.put_slice(&self.payload);
        packet.freeze()
    }
}

/// Split `message` into chunks whose encoded size fits `mtu`.
///
/// An empty message still produces one chunk with an empty payload so the
/// receiver observes a completed sequence.
///
/// # Errors
///
/// Returns [`ChunkError::MtuTooSmall`] when `mtu < 3`, and
/// [`ChunkError::TooManyChunks`] when the message would need more than
/// [`MAX_CHUNKS`] chunks; nothing is sent in either case.
pub fn split_message(message: &Message, mtu: u32) -> Result<Vec<Chunk>, ChunkError> {
    let payload_size = (mtu as usize).saturating_sub(HEADER_BYTES);
    if payload_size == 0 {
        return Err(ChunkError::MtuTooSmall { mtu });
    }

    let bytes = message.to_bytes();
    let required = bytes.len().div_ceil(payload_size).max(1);
    if required > MAX_CHUNKS as usize {
        return Err(ChunkError::TooManyChunks { required });
    }
    #[expect(clippy::cast_possible_truncation, reason = "required checked against MAX_CHUNKS")]
    let total = required as u8;

    let mut chunks = Vec::with_capacity(required);
    for index in 0..required {
        let start = index * payload_size;
        let end = (start + payload_size).min(bytes.len());
        #[expect(clippy::cast_possible_truncation, reason = "index is below MAX_CHUNKS")]
        let sequence = (index + 1) as u8;
        chunks.push(Chunk {
            header: ChunkHeader::new(total, sequence),
            payload: bytes.slice(start..end),
        });
    }
    Ok(chunks)
}
