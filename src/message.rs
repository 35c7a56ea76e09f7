//! Owned message payloads exchanged between peers.
//!
//! A [`Message`] is an immutable byte sequence with no identity beyond its
//! content. The framing and chunking layers treat it as opaque; the peers
//! this crate was written for exchange UTF-8 text, so conversions from
//! `&str` are provided for convenience.

use bytes::Bytes;

/// Immutable application-level message payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message(Bytes);

impl Message {
    /// Create a message from any byte source.
    #[must_use]
    pub fn new(payload: impl Into<Bytes>) -> Self { Self(payload.into()) }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { self.0.as_ref() }

    /// Return a cheap owned handle to the payload.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes { self.0.clone() }

    /// Consume the message, returning the payload.
    #[must_use]
    pub fn into_bytes(self) -> Bytes { self.0 }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl From<Bytes> for Message {
    fn from(payload: Bytes) -> Self { Self(payload) }
}

impl From<Vec<u8>> for Message {
    fn from(payload: Vec<u8>) -> Self { Self(payload.into()) }
}

impl From<&[u8]> for Message {
    fn from(payload: &[u8]) -> Self { Self(Bytes::copy_from_slice(payload)) }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self { Self(Bytes::copy_from_slice(text.as_bytes())) }
}
