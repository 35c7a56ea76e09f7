//! Events a session reports to the layer above it.

use tokio::sync::mpsc;

use super::{id::SessionId, state::LinkState};
use crate::{error::DecodeFailure, message::Message};

/// Notification delivered on a session's event channel.
///
/// Exactly one [`StateChanged`](SessionEvent::StateChanged) event fires per
/// transition into `Connected` or `Disconnected`; entering `Connecting`
/// reports nothing. Every decode failure is reported exactly once.
#[derive(Debug)]
pub enum SessionEvent {
    /// The session entered `Connected` or `Disconnected`.
    StateChanged {
        session: SessionId,
        state: LinkState,
    },
    /// A complete message was decoded from the link.
    MessageReceived {
        session: SessionId,
        message: Message,
    },
    /// A message failed to decode; [`DecodeFailure::is_fatal`] tells
    /// whether the session went down with it.
    DecodeFailed {
        session: SessionId,
        error: DecodeFailure,
    },
}

/// Receiving half of a session's event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<SessionEvent>;

pub(crate) type EventSender = mpsc::UnboundedSender<SessionEvent>;
