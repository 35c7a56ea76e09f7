//! Wire-format constants and the pure frame encoder.

use bytes::{BufMut, BytesMut};

use super::FrameError;

/// Hard ceiling on a declared payload length (10 MiB). Bounds allocation no
/// matter what a peer claims.
pub const LENGTH_LIMIT: usize = 10 * 1024 * 1024;

/// Delimiter sentinel separating the length header from the payload: the
/// big-endian UTF-16 encoding of `':'`.
pub const DELIMITER: [u8; 2] = [0x00, b':'];

/// Size of the big-endian length header.
pub const LENGTH_BYTES: usize = 4;

/// Size of the delimiter sentinel.
pub const DELIMITER_BYTES: usize = 2;

/// Payloads are read in pages of this many bytes.
pub const PAGE_SIZE: usize = 1024;

/// Read attempts granted per page before the frame is abandoned as
/// incomplete.
pub const PAGE_READ_ATTEMPTS: u32 = 5;

/// Bytes of header preceding the payload on the wire.
#[must_use]
pub const fn frame_overhead() -> usize { LENGTH_BYTES + DELIMITER_BYTES }

/// Encode `payload` into a single framed buffer.
///
/// # Errors
///
/// Returns [`FrameError::Oversized`] when the payload exceeds
/// [`LENGTH_LIMIT`].
pub fn encode_frame(payload: &[u8]) -> Result<BytesMut, FrameError> {
    if payload.len() > LENGTH_LIMIT {
        return Err(FrameError::Oversized {
            length: payload.len(),
            limit: LENGTH_LIMIT,
        });
    }
    let mut frame = BytesMut::with_capacity(frame_overhead() + payload.len());
    #[expect(clippy::cast_possible_truncation, reason = "length checked against LENGTH_LIMIT")]
    frame.put_u32(payload.len() as u32);
    frame.put_slice(&DELIMITER);
    frame.put_slice(payload);
    Ok(frame)
}
