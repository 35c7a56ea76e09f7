//! Inbound half of the stream codec.
//!
//! [`FrameReader`] decodes exactly one complete message per call. The owning
//! session invokes it in a loop for as long as the stream stays open; a
//! fatal error exits that loop, while message-local decode failures leave
//! the stream usable for the next frame.

use log::{debug, error, warn};
use tokio::io::{AsyncRead, AsyncReadExt};

use super::{
    FrameError,
    format::{DELIMITER, DELIMITER_BYTES, LENGTH_BYTES, LENGTH_LIMIT, PAGE_READ_ATTEMPTS, PAGE_SIZE},
};
use crate::message::Message;

/// Decodes length-framed messages from a byte stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    stream: R,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Wrap a readable stream.
    #[must_use]
    pub fn new(stream: R) -> Self { Self { stream } }

    /// Consume the reader, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> R { self.stream }

    /// Decode the next message from the stream.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Oversized`] when the declared length exceeds
    /// [`LENGTH_LIMIT`] (no payload read is attempted),
    /// [`FrameError::CorruptDelimiter`] when the sentinel does not match
    /// (no resynchronization is attempted; the stream position stays past
    /// the consumed header bytes), [`FrameError::IncompleteRead`] when a
    /// payload page stays short after its retry budget, and
    /// [`FrameError::Io`] when the stream itself fails.
    pub async fn read_message(&mut self) -> Result<Message, FrameError> {
        let mut length_buffer = [0_u8; LENGTH_BYTES];
        self.stream.read_exact(&mut length_buffer).await?;
        let length = u32::from_be_bytes(length_buffer) as usize;
        debug!("frame header declares {length} payload bytes");

        if length > LENGTH_LIMIT {
            error!("declared length {length} is over the {LENGTH_LIMIT}-byte limit");
            return Err(FrameError::Oversized {
                length,
                limit: LENGTH_LIMIT,
            });
        }

        let mut delimiter_buffer = [0_u8; DELIMITER_BYTES];
        self.stream.read_exact(&mut delimiter_buffer).await?;
        if delimiter_buffer != DELIMITER {
            error!("wrong delimiter {delimiter_buffer:?}; corrupted message");
            return Err(FrameError::CorruptDelimiter {
                found: delimiter_buffer,
            });
        }

        let mut payload = vec![0_u8; length];
        let mut total_bytes = 0_usize;
        let pages = length.div_ceil(PAGE_SIZE);
        for page in 0..pages {
            let expected = if page == pages - 1 {
                length - total_bytes
            } else {
                PAGE_SIZE
            };
            let got = self
                .read_page(&mut payload[total_bytes..total_bytes + expected])
                .await?;
            total_bytes += got;
            if got < expected {
                error!("page {page} stayed short after retries: expected {expected}, got {got}");
                return Err(FrameError::IncompleteRead {
                    page,
                    expected,
                    got,
                });
            }
        }
        debug_assert_eq!(total_bytes, length);

        Ok(Message::from(payload))
    }

    /// Fill `page`, retrying short reads up to the per-page budget.
    ///
    /// Returns how many bytes were actually placed in `page`; the caller
    /// decides whether that completes the page.
    async fn read_page(&mut self, page: &mut [u8]) -> Result<usize, FrameError> {
        let mut filled = 0_usize;
        for attempt in 0..PAGE_READ_ATTEMPTS {
            let read = self.stream.read(&mut page[filled..]).await?;
            filled += read;
            if filled == page.len() {
                return Ok(filled);
            }
            warn!(
                "short page read (attempt {attempt}): {filled}/{} bytes so far",
                page.len()
            );
        }
        Ok(filled)
    }
}
