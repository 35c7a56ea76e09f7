//! Seams to the transport layer this crate sits on top of.
//!
//! Radio and socket management live outside the crate; what arrives here is
//! a readable/writable byte stream (any `AsyncRead`/`AsyncWrite` pair) or,
//! for notification links, a per-packet send primitive plus incoming packet
//! payloads handed to [`Session::handle_packet`](crate::session::Session).

use async_trait::async_trait;
use bytes::Bytes;

/// Per-packet send primitive of a notification transport.
///
/// Implementations report plain success or failure; transient refusals are
/// normal for radio stacks, so callers wrap sends in the retry executor.
/// Packets handed in are already bounded by the negotiated MTU.
#[async_trait]
pub trait PacketSink: Send + Sync {
    /// Deliver one packet. Returns whether the transport accepted it.
    async fn send_packet(&self, packet: Bytes) -> bool;
}
