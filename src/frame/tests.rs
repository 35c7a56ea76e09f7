//! Unit tests for the stream framing codec.

mod writer_tests;

use std::{
    io,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::io::{AsyncRead, ReadBuf};

/// Test stream that serves `data` at most `per_read` bytes per call and
/// returns zero-byte reads once exhausted, mimicking a stalled radio link.
struct DribbleReader {
    data: Vec<u8>,
    position: usize,
    per_read: usize,
}

impl DribbleReader {
    fn new(data: impl Into<Vec<u8>>, per_read: usize) -> Self {
        Self {
            data: data.into(),
            position: 0,
            per_read,
        }
    }
}

impl AsyncRead for DribbleReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let remaining = self.data.len() - self.position;
        let to_serve = remaining.min(self.per_read).min(buf.remaining());
        let start = self.position;
        buf.put_slice(&self.data[start..start + to_serve]);
        self.position += to_serve;
        Poll::Ready(Ok(()))
    }
}
