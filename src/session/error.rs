//! Errors raised by session lifecycle operations.

use thiserror::Error;

use super::state::LinkState;

/// Failure modes of session lifecycle calls.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A connect was attempted while the session is already live. Close
    /// the existing link first.
    #[error("connect rejected: session is already {current}")]
    AlreadyActive { current: LinkState },
    /// A send was attempted on a session that is not `Connected`.
    #[error("session is not connected")]
    NotConnected,
}
