//! Round-trip law: splitting then reassembling any bounded message is
//! lossless for every workable MTU.

use proptest::prelude::*;

use crate::{
    chunk::{ChunkReassembler, split_message},
    message::Message,
};

proptest! {
    #[test]
    fn split_then_reassemble_is_identity(
        payload in proptest::collection::vec(any::<u8>(), 0..2048),
        mtu in 3_u32..128,
    ) {
        let message = Message::from(payload.clone());
        let payload_size = mtu as usize - 2;
        prop_assume!(payload.len().div_ceil(payload_size).max(1) <= 255);

        let mut reassembler = ChunkReassembler::new();
        let mut completed = None;
        for chunk in split_message(&message, mtu).expect("chunk count fits") {
            completed = reassembler.push(&chunk.encode()).expect("packet decodes");
        }

        let complete = completed.expect("final chunk completes the message");
        prop_assert_eq!(complete.as_bytes(), payload.as_slice());
        prop_assert_eq!(reassembler.buffered_len(), 0);
    }
}
