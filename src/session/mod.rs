//! Stateful representation of one peer connection.
//!
//! A [`Session`] tracks the `Disconnected -> Connecting -> Connected ->
//! Disconnected` lifecycle, owns the per-link chunk reassembly buffer, and
//! reports state changes, decoded messages, and decode failures on a single
//! event channel. It is independent of which physical transport carries the
//! link: stream adapters drive it through [`run_read_loop`] and
//! [`SessionWriter`], notification adapters through
//! [`Session::handle_packet`] and [`Session::send_chunked`].

pub mod error;
pub mod event;
pub mod id;
pub mod reader;
pub mod registry;
pub mod role;
pub mod state;
pub mod writer;

pub use error::SessionError;
pub use event::{EventReceiver, SessionEvent};
pub use id::SessionId;
pub use reader::run_read_loop;
pub use registry::SessionRegistry;
pub use role::Role;
pub use state::LinkState;
pub use writer::SessionWriter;

use std::sync::{
    Mutex,
    atomic::{AtomicU32, Ordering},
};

use log::{debug, warn};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::{
    chunk::{self, ChunkReassembler},
    config::LinkConfig,
    error::{DecodeFailure, NearlinkError},
    message::Message,
    transport::PacketSink,
};

use event::EventSender;

/// One logical peer connection.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    role: Role,
    config: LinkConfig,
    state: Mutex<LinkState>,
    mtu: AtomicU32,
    mtu_signal: Notify,
    reassembler: Mutex<ChunkReassembler>,
    outbound: tokio::sync::Mutex<()>,
    cancel: Mutex<CancellationToken>,
    events: EventSender,
}

impl Session {
    /// Create a session and the receiving half of its event channel.
    #[must_use]
    pub fn new(id: SessionId, role: Role, config: LinkConfig) -> (Self, EventReceiver) {
        let (events, receiver) = tokio::sync::mpsc::unbounded_channel();
        let session = Self {
            id,
            role,
            mtu: AtomicU32::new(config.min_mtu),
            config,
            state: Mutex::new(LinkState::Disconnected),
            mtu_signal: Notify::new(),
            reassembler: Mutex::new(ChunkReassembler::new()),
            outbound: tokio::sync::Mutex::new(()),
            cancel: Mutex::new(CancellationToken::new()),
            events,
        };
        (session, receiver)
    }

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId { self.id }

    /// Role this session plays on its link.
    #[must_use]
    pub const fn role(&self) -> Role { self.role }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LinkState { *self.state.lock().expect("state lock poisoned") }

    /// Currently negotiated MTU.
    #[must_use]
    pub fn mtu(&self) -> u32 { self.mtu.load(Ordering::Relaxed) }

    /// Token cancelled when the session tears down. Retry loops tied to
    /// this session select on it.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.lock().expect("cancel lock poisoned").clone()
    }

    /// Begin a connection attempt: `Disconnected -> Connecting`.
    ///
    /// Entering `Connecting` reports nothing on the event channel. The MTU
    /// falls back to the conservative minimum until the new link
    /// renegotiates it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyActive`] while the session is
    /// `Connecting` or `Connected`; the existing link must be closed
    /// first.
    pub fn connect(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().expect("state lock poisoned");
        if *state != LinkState::Disconnected {
            warn!("session {}: connect while {}", self.id, *state);
            return Err(SessionError::AlreadyActive { current: *state });
        }
        *state = LinkState::Connecting;
        drop(state);

        self.mtu.store(self.config.min_mtu, Ordering::Relaxed);
        *self.cancel.lock().expect("cancel lock poisoned") = CancellationToken::new();
        debug!("session {} ({}): connecting", self.id, self.role);
        Ok(())
    }

    /// Mark the transport handshake complete: `Connecting -> Connected`.
    ///
    /// Emits exactly one `StateChanged(Connected)` event. Calling this from
    /// any state but `Connecting` is a no-op apart from a diagnostic.
    pub fn link_connected(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if !state.can_transition_to(LinkState::Connected) {
            warn!(
                "session {}: ignoring link-up while {}",
                self.id, *state
            );
            return;
        }
        *state = LinkState::Connected;
        self.emit(SessionEvent::StateChanged {
            session: self.id,
            state: LinkState::Connected,
        });
        debug!("session {} ({}): connected", self.id, self.role);
    }

    /// Variant of [`Session::link_connected`] for notification transports,
    /// which renegotiate the MTU during the handshake.
    ///
    /// Waits up to the configured grace period for the renegotiation
    /// acknowledgment, then declares the link connected either way; some
    /// peers accept the MTU request yet never deliver the acknowledgment,
    /// and holding the session in `Connecting` forever trades far worse
    /// than keeping the previous MTU.
    pub async fn link_connected_after_mtu(&self) {
        let grace = self.config.mtu_grace;
        let cancel = self.cancel_token();
        tokio::select! {
            () = cancel.cancelled() => {
                debug!("session {}: cancelled while awaiting MTU", self.id);
                return;
            }
            acknowledged = tokio::time::timeout(grace, self.mtu_signal.notified()) => {
                if acknowledged.is_err() {
                    warn!(
                        "session {}: no MTU acknowledgment within {grace:?}; keeping mtu {}",
                        self.id,
                        self.mtu()
                    );
                }
            }
        }
        self.link_connected();
    }

    /// Record a renegotiated MTU, clamped to the configured bounds, and
    /// wake a pending grace wait.
    pub fn mtu_changed(&self, new_mtu: u32) {
        let clamped = new_mtu.clamp(self.config.min_mtu, self.config.max_mtu);
        if clamped != new_mtu {
            warn!(
                "session {}: renegotiated mtu {new_mtu} clamped to {clamped}",
                self.id
            );
        }
        self.mtu.store(clamped, Ordering::Relaxed);
        self.mtu_signal.notify_one();
        debug!("session {}: mtu is now {clamped}", self.id);
    }

    /// Tear the session down after transport-reported link loss.
    pub fn link_disconnected(&self) { self.teardown("link lost"); }

    /// Explicitly close the session.
    ///
    /// Releases the reassembly buffer, cancels retry loops tied to the
    /// session, and emits exactly one `StateChanged(Disconnected)` event.
    /// Closing an already-`Disconnected` session is a silent no-op.
    pub fn close(&self) { self.teardown("closed"); }

    /// Feed one incoming notification packet through the chunk codec.
    ///
    /// A completed message is reported as `MessageReceived`; a packet that
    /// fails to decode is reported as `DecodeFailed` and the session stays
    /// up. Packets arriving while not `Connected` are dropped.
    pub fn handle_packet(&self, packet: &[u8]) {
        if self.state() != LinkState::Connected {
            debug!("session {}: dropping packet while not connected", self.id);
            return;
        }
        let outcome = self
            .reassembler
            .lock()
            .expect("reassembler lock poisoned")
            .push(packet);
        match outcome {
            Ok(Some(message)) => self.emit_message(message),
            Ok(None) => {}
            Err(error) => self.emit_decode_failure(DecodeFailure::Chunk(error)),
        }
    }

    /// Send `message` over a notification transport, chunked to the
    /// currently negotiated MTU.
    ///
    /// Outbound sends are serialized per session so chunks of two messages
    /// can never interleave on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotConnected`] while the session is down,
    /// and any [`ChunkError`](crate::chunk::ChunkError) from splitting or
    /// delivery.
    pub async fn send_chunked<S>(&self, sink: &S, message: &Message) -> Result<(), NearlinkError>
    where
        S: PacketSink + ?Sized,
    {
        if self.state() != LinkState::Connected {
            return Err(SessionError::NotConnected.into());
        }
        let _outbound = self.outbound.lock().await;
        let token = self.cancel_token();
        chunk::send_chunked(sink, message, self.mtu(), self.config.retry, &token).await?;
        Ok(())
    }

    /// Send `message` over a stream transport through `writer`.
    ///
    /// A transport-level write failure tears the session down; encoding
    /// failures leave it usable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotConnected`] while the session is down,
    /// and any [`FrameError`](crate::frame::FrameError) from the writer.
    pub async fn send_framed<W>(
        &self,
        writer: &SessionWriter<W>,
        message: &Message,
    ) -> Result<(), NearlinkError>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        if self.state() != LinkState::Connected {
            return Err(SessionError::NotConnected.into());
        }
        match writer.send(message.as_bytes()).await {
            Ok(()) => Ok(()),
            Err(error) => {
                if error.is_fatal() {
                    self.link_disconnected();
                }
                Err(error.into())
            }
        }
    }

    pub(crate) fn emit_message(&self, message: Message) {
        self.emit(SessionEvent::MessageReceived {
            session: self.id,
            message,
        });
    }

    pub(crate) fn emit_decode_failure(&self, error: DecodeFailure) {
        self.emit(SessionEvent::DecodeFailed {
            session: self.id,
            error,
        });
    }

    fn emit(&self, event: SessionEvent) {
        // A dropped receiver only means nobody is listening any more.
        let _ = self.events.send(event);
    }

    fn teardown(&self, reason: &str) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if *state == LinkState::Disconnected {
                debug!("session {}: {reason} while already disconnected", self.id);
                return;
            }
            *state = LinkState::Disconnected;
            self.emit(SessionEvent::StateChanged {
                session: self.id,
                state: LinkState::Disconnected,
            });
        }
        self.cancel.lock().expect("cancel lock poisoned").cancel();
        self.reassembler
            .lock()
            .expect("reassembler lock poisoned")
            .reset();
        debug!("session {} ({}): {reason}; now disconnected", self.id, self.role);
    }
}
