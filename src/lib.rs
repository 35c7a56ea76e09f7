//! Reliable message delivery over short-range radio links.
//!
//! `nearlink` turns three unreliable transport shapes into one
//! message-delivery abstraction: length-framed decoding for byte streams,
//! MTU-bounded chunking for notification packet channels, a bounded
//! fixed-delay retry executor for transiently failing link operations, and
//! a per-session connection state machine that ties them together and
//! reports lifecycle and decode events to the layer above.

pub mod chunk;
pub mod config;
pub mod error;
pub mod frame;
pub mod message;
pub mod retry;
pub mod session;
pub mod transport;

pub use chunk::{Chunk, ChunkError, ChunkHeader, ChunkReassembler, send_chunked, split_message};
pub use config::{LinkConfig, MAX_MTU, MIN_MTU, MTU_GRACE};
pub use error::{DecodeFailure, NearlinkError};
pub use frame::{FrameError, FrameReader, FrameWriter, LENGTH_LIMIT, encode_frame};
pub use message::Message;
pub use retry::{RetryPolicy, retry, retry_cancellable};
pub use session::{
    EventReceiver,
    LinkState,
    Role,
    Session,
    SessionError,
    SessionEvent,
    SessionId,
    SessionRegistry,
    SessionWriter,
    run_read_loop,
};
pub use transport::PacketSink;
