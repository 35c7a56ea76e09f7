//! MTU-bounded chunk codec for notification transports.
//!
//! Notification links deliver fixed-size packets with no fragmentation of
//! their own, so messages are split here: a two-byte header carries the
//! total chunk count and the 1-based sequence number, and the payload fills
//! the rest of the negotiated MTU. The receive path appends payloads to a
//! per-session buffer and completes the message when the sequence number
//! reaches the total.

pub mod chunker;
pub mod error;
pub mod header;
pub mod reassembler;
pub mod sender;

pub use chunker::{Chunk, split_message};
pub use error::ChunkError;
pub use header::{ChunkHeader, HEADER_BYTES, MAX_CHUNKS};
pub use reassembler::ChunkReassembler;
pub use sender::send_chunked;

#[cfg(test)]
mod tests;
