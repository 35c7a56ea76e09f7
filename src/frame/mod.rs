//! Length-framed message codec for stream transports.
//!
//! Stream links (RFCOMM, group-formed TCP sockets) carry one message per
//! frame: a 4-byte big-endian length, a 2-byte delimiter sentinel, then the
//! payload. The reader decodes exactly one complete message per call and
//! recovers from partial reads with a bounded per-page retry budget; the
//! writer produces the same layout and must be serialized per session.

pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

pub use error::FrameError;
pub use format::{
    DELIMITER,
    DELIMITER_BYTES,
    LENGTH_BYTES,
    LENGTH_LIMIT,
    PAGE_READ_ATTEMPTS,
    PAGE_SIZE,
    encode_frame,
    frame_overhead,
};
pub use reader::FrameReader;
pub use writer::FrameWriter;

#[cfg(test)]
mod tests;
