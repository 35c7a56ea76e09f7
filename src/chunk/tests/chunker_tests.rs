//! Tests for outbound chunk splitting.

use rstest::rstest;

use crate::{
    chunk::{ChunkError, split_message},
    message::Message,
};

#[test]
fn splits_message_across_payload_sized_chunks() {
    let message = Message::from(vec![7_u8; 300]);

    let chunks = split_message(&message, 22).expect("message fits 15 chunks");

    assert_eq!(chunks.len(), 15);
    for (index, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.header().total(), 15);
        assert_eq!(usize::from(chunk.header().sequence()), index + 1);
        assert_eq!(chunk.payload().len(), 20);
    }
    assert!(chunks[14].header().is_final());
}

#[test]
fn final_chunk_carries_the_remainder() {
    let message = Message::from(vec![1_u8; 25]);

    let chunks = split_message(&message, 12).expect("message fits 3 chunks");

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].payload().len(), 10);
    assert_eq!(chunks[1].payload().len(), 10);
    assert_eq!(chunks[2].payload().len(), 5);
}

#[test]
fn empty_message_becomes_one_empty_chunk() {
    let chunks = split_message(&Message::default(), 20).expect("empty message fits");

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].payload().is_empty());
    assert!(chunks[0].header().is_final());
    assert_eq!(chunks[0].header().sequence(), 1);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn mtu_without_payload_room_is_rejected(#[case] mtu: u32) {
    let error = split_message(&Message::from("x"), mtu).expect_err("must reject");

    assert_eq!(error, ChunkError::MtuTooSmall { mtu });
}

#[test]
fn message_needing_256_chunks_is_rejected() {
    // mtu 3 leaves one payload byte per chunk.
    let message = Message::from(vec![0_u8; 256]);

    let error = split_message(&message, 3).expect_err("must reject");

    assert_eq!(error, ChunkError::TooManyChunks { required: 256 });
}

#[test]
fn message_needing_exactly_255_chunks_is_accepted() {
    let message = Message::from(vec![0_u8; 255]);

    let chunks = split_message(&message, 3).expect("255 chunks fit the counter");

    assert_eq!(chunks.len(), 255);
    assert_eq!(chunks[254].header().sequence(), 255);
}

#[test]
fn encoded_chunk_prefixes_header_bytes() {
    let chunks = split_message(&Message::from("hi"), 22).expect("single chunk");

    let packet = chunks[0].encode();

    assert_eq!(packet.as_ref(), [1, 1, b'h', b'i']);
}
