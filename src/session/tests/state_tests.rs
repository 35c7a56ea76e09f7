//! Tests for lifecycle transitions and their event discipline.

use rstest::rstest;

use super::{connected_session, expect_no_event, expect_state_event, new_session};
use crate::{
    error::DecodeFailure,
    session::{LinkState, Role, SessionError, SessionEvent},
};

#[test]
fn dialing_roles_initiate_their_links() {
    assert!(Role::Initiator.initiates());
    assert!(Role::Central.initiates());
    assert!(Role::GroupClient.initiates());
    assert!(!Role::Responder.initiates());
    assert!(!Role::Peripheral.initiates());
    assert!(!Role::GroupOwner.initiates());
}

#[tokio::test]
async fn full_cycle_emits_exactly_one_connected_and_one_disconnected() {
    let (session, mut events) = new_session(Role::Initiator);
    assert_eq!(session.state(), LinkState::Disconnected);

    session.connect().expect("connect from disconnected");
    assert_eq!(session.state(), LinkState::Connecting);
    expect_no_event(&mut events);

    session.link_connected();
    assert_eq!(session.state(), LinkState::Connected);
    expect_state_event(&mut events, LinkState::Connected);

    session.close();
    assert_eq!(session.state(), LinkState::Disconnected);
    expect_state_event(&mut events, LinkState::Disconnected);
    expect_no_event(&mut events);
}

#[tokio::test]
async fn connect_is_rejected_while_the_session_is_live() {
    let (session, _events) = new_session(Role::Central);
    session.connect().expect("first connect");

    let while_connecting = session.connect().expect_err("must reject");
    session.link_connected();
    let while_connected = session.connect().expect_err("must reject");

    assert_eq!(
        while_connecting,
        SessionError::AlreadyActive {
            current: LinkState::Connecting,
        }
    );
    assert_eq!(
        while_connected,
        SessionError::AlreadyActive {
            current: LinkState::Connected,
        }
    );
}

#[rstest]
#[tokio::test]
async fn link_up_outside_connecting_is_a_silent_no_op(
    #[values(false, true)] already_closed: bool,
) {
    let (session, mut events) = new_session(Role::Responder);
    if already_closed {
        session.connect().expect("connect");
        session.link_connected();
        session.close();
        expect_state_event(&mut events, LinkState::Connected);
        expect_state_event(&mut events, LinkState::Disconnected);
    }

    session.link_connected();

    assert_eq!(session.state(), LinkState::Disconnected);
    expect_no_event(&mut events);
}

#[tokio::test]
async fn close_is_idempotent() {
    let (session, mut events) = connected_session(Role::Initiator);

    session.close();
    expect_state_event(&mut events, LinkState::Disconnected);

    session.close();
    session.link_disconnected();
    expect_no_event(&mut events);
}

#[tokio::test]
async fn close_cancels_pending_retry_loops() {
    let (session, _events) = connected_session(Role::Peripheral);
    let token = session.cancel_token();

    session.close();

    assert!(token.is_cancelled());
}

#[tokio::test]
async fn reconnect_gets_a_fresh_cancellation_token() {
    let (session, _events) = connected_session(Role::Peripheral);
    session.close();

    session.connect().expect("reconnect from disconnected");

    assert!(!session.cancel_token().is_cancelled());
}

#[tokio::test]
async fn completed_chunk_sequence_is_reported_as_a_message() {
    let (session, mut events) = connected_session(Role::Central);

    session.handle_packet(&[2, 1, b'h']);
    expect_no_event(&mut events);
    session.handle_packet(&[2, 2, b'i']);

    match events.try_recv().expect("message event") {
        SessionEvent::MessageReceived { message, .. } => assert_eq!(message.as_bytes(), b"hi"),
        other => panic!("expected message event, got {other:?}"),
    }
}

#[tokio::test]
async fn packet_decode_failure_is_reported_and_keeps_the_session_up() {
    let (session, mut events) = connected_session(Role::Central);

    session.handle_packet(&[5]);

    match events.try_recv().expect("failure event") {
        SessionEvent::DecodeFailed { error, .. } => {
            assert!(matches!(error, DecodeFailure::Chunk(_)));
            assert!(!error.is_fatal());
        }
        other => panic!("expected failure event, got {other:?}"),
    }
    assert_eq!(session.state(), LinkState::Connected);
}

#[tokio::test]
async fn packets_are_dropped_while_disconnected() {
    let (session, mut events) = new_session(Role::Central);

    session.handle_packet(&[1, 1, b'x']);

    expect_no_event(&mut events);
}

#[tokio::test]
async fn close_releases_a_partial_reassembly_buffer() {
    let (session, mut events) = connected_session(Role::Central);
    session.handle_packet(&[2, 1, b'x']);

    session.close();
    expect_state_event(&mut events, LinkState::Disconnected);

    session.connect().expect("reconnect");
    session.link_connected();
    expect_state_event(&mut events, LinkState::Connected);
    session.handle_packet(&[1, 1, b'y']);

    match events.try_recv().expect("message event") {
        SessionEvent::MessageReceived { message, .. } => {
            // Only the fresh payload: the stale chunk did not survive close.
            assert_eq!(message.as_bytes(), b"y");
        }
        other => panic!("expected message event, got {other:?}"),
    }
}
