//! Read worker driving a session's inbound stream.

use log::debug;
use tokio::io::AsyncRead;

use super::{Session, state::LinkState};
use crate::{error::DecodeFailure, frame::FrameReader};

/// Drive `reader` for as long as `session` stays connected.
///
/// Each session runs exactly one read worker; the reassembly buffer and
/// the stream cursor are single-writer state. Decoded messages and decode
/// failures are reported on the session's event channel. A fatal transport
/// failure tears the session down and ends the loop; message-local decode
/// failures keep it running. Closing the underlying stream makes the
/// blocked read fail, which is how an in-flight read gets cancelled.
pub async fn run_read_loop<R>(session: &Session, reader: &mut FrameReader<R>)
where
    R: AsyncRead + Unpin,
{
    let cancel = session.cancel_token();
    debug!("session {}: read worker started", session.id());

    while session.state() == LinkState::Connected {
        let outcome = tokio::select! {
            () = cancel.cancelled() => break,
            outcome = reader.read_message() => outcome,
        };
        match outcome {
            Ok(message) => session.emit_message(message),
            Err(error) => {
                let fatal = error.is_fatal();
                session.emit_decode_failure(DecodeFailure::Frame(error));
                if fatal {
                    session.link_disconnected();
                    break;
                }
            }
        }
    }

    debug!("session {}: read worker exited", session.id());
}
