//! Serialized outbound path for a session's stream transport.

use tokio::io::AsyncWrite;
use tokio::sync::Mutex;

use crate::frame::{FrameError, FrameWriter};

/// Frame writer behind a per-session lock.
///
/// Two callers sending concurrently take turns; the length, delimiter, and
/// payload writes of one message always reach the wire contiguously.
#[derive(Debug)]
pub struct SessionWriter<W> {
    writer: Mutex<FrameWriter<W>>,
}

impl<W: AsyncWrite + Unpin> SessionWriter<W> {
    /// Wrap the writable half of a session's stream.
    #[must_use]
    pub fn new(stream: W) -> Self {
        Self {
            writer: Mutex::new(FrameWriter::new(stream)),
        }
    }

    /// Write one framed message while holding the outbound lock.
    ///
    /// # Errors
    ///
    /// Returns any [`FrameError`] from the underlying writer.
    pub async fn send(&self, payload: &[u8]) -> Result<(), FrameError> {
        let mut writer = self.writer.lock().await;
        writer.write_message(payload).await
    }

    /// Consume the wrapper, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> W { self.writer.into_inner().into_inner() }
}
