//! Outbound driver that delivers chunks through a packet transport.

use log::{debug, error};
use tokio_util::sync::CancellationToken;

use super::{ChunkError, chunker::split_message};
use crate::{
    message::Message,
    retry::{RetryPolicy, retry_cancellable},
    transport::PacketSink,
};

/// Split `message` for `mtu` and deliver every chunk through `sink`.
///
/// Each per-packet send is wrapped in the cancellable retry executor with
/// `policy`. The first chunk whose retries are exhausted (or that is
/// cancelled via `token`) aborts the remaining chunks.
///
/// # Errors
///
/// Returns the splitting errors of [`split_message`] before anything is
/// sent, and [`ChunkError::SendRetriesExhausted`] naming the failed chunk
/// otherwise.
pub async fn send_chunked<S>(
    sink: &S,
    message: &Message,
    mtu: u32,
    policy: RetryPolicy,
    token: &CancellationToken,
) -> Result<(), ChunkError>
where
    S: PacketSink + ?Sized,
{
    let chunks = split_message(message, mtu)?;
    let total = chunks.len();
    for chunk in chunks {
        let sequence = chunk.header().sequence();
        let packet = chunk.encode();
        let delivered = retry_cancellable(policy, token, || {
            let packet = packet.clone();
            async move { sink.send_packet(packet).await }
        })
        .await;
        if !delivered {
            error!("chunk {sequence}/{total} undelivered; aborting the rest");
            return Err(ChunkError::SendRetriesExhausted { sequence });
        }
        debug!("chunk {sequence}/{total} delivered");
    }
    Ok(())
}
