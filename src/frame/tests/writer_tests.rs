//! Tests for outbound frame encoding.

use crate::frame::{DELIMITER, FrameError, FrameWriter, LENGTH_LIMIT, encode_frame, frame_overhead};

#[tokio::test]
async fn writes_length_delimiter_then_payload() {
    let mut wire = Vec::new();
    let mut writer = FrameWriter::new(&mut wire);

    writer.write_message(b"hi").await.expect("write should succeed");

    assert_eq!(wire, [0, 0, 0, 2, 0, b':', b'h', b'i']);
}

#[tokio::test]
async fn writes_empty_payload_as_bare_header() {
    let mut wire = Vec::new();
    let mut writer = FrameWriter::new(&mut wire);

    writer.write_message(b"").await.expect("write should succeed");

    assert_eq!(wire, [0, 0, 0, 0, 0, b':']);
}

#[tokio::test]
async fn rejects_oversized_payload_before_writing() {
    let payload = vec![0_u8; LENGTH_LIMIT + 1];
    let mut wire = Vec::new();
    let mut writer = FrameWriter::new(&mut wire);

    let error = writer.write_message(&payload).await.expect_err("must reject");

    assert!(matches!(error, FrameError::Oversized { .. }));
    assert!(wire.is_empty());
}

#[test]
fn encoder_matches_writer_layout() {
    let frame = encode_frame(b"hi").expect("payload fits");

    assert_eq!(frame.len(), frame_overhead() + 2);
    assert_eq!(&frame[..4], &[0, 0, 0, 2]);
    assert_eq!(&frame[4..6], &DELIMITER);
    assert_eq!(&frame[6..], b"hi");
}
