//! Outbound half of the stream codec.

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{
    FrameError,
    format::{DELIMITER, LENGTH_LIMIT},
};

/// Encodes length-framed messages onto a byte stream.
///
/// Callers must serialize access per session; interleaving the length,
/// delimiter, and payload writes of two messages corrupts the wire format.
/// [`SessionWriter`](crate::session::SessionWriter) provides that lock.
#[derive(Debug)]
pub struct FrameWriter<W> {
    stream: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    /// Wrap a writable stream.
    #[must_use]
    pub fn new(stream: W) -> Self { Self { stream } }

    /// Consume the writer, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> W { self.stream }

    /// Write one message as a length header, the delimiter sentinel, and
    /// the payload, then flush.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Oversized`] when the payload exceeds
    /// [`LENGTH_LIMIT`] (nothing is written), or [`FrameError::Io`] when
    /// the stream fails mid-write.
    pub async fn write_message(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        if payload.len() > LENGTH_LIMIT {
            return Err(FrameError::Oversized {
                length: payload.len(),
                limit: LENGTH_LIMIT,
            });
        }
        #[expect(clippy::cast_possible_truncation, reason = "length checked against LENGTH_LIMIT")]
        let length = payload.len() as u32;
        debug!("writing frame with {length} payload bytes");

        self.stream.write_all(&length.to_be_bytes()).await?;
        self.stream.write_all(&DELIMITER).await?;
        self.stream.write_all(payload).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
