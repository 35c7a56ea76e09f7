//! Tests for the live-session registry.

use std::sync::Arc;

use crate::{
    config::LinkConfig,
    session::{Role, Session, SessionId, SessionRegistry},
};

fn registered_session(id: u64, registry: &SessionRegistry) -> Arc<Session> {
    let (session, _events) = Session::new(SessionId::new(id), Role::Initiator, LinkConfig::default());
    let session = Arc::new(session);
    registry.insert(&session);
    session
}

#[test]
fn lookup_returns_the_live_session() {
    let registry = SessionRegistry::default();
    let session = registered_session(1, &registry);

    let found = registry.get(&SessionId::new(1)).expect("session is live");

    assert_eq!(found.id(), session.id());
}

#[test]
fn dropped_sessions_disappear_from_lookup() {
    let registry = SessionRegistry::default();
    let session = registered_session(2, &registry);
    drop(session);

    assert!(registry.get(&SessionId::new(2)).is_none());
    assert!(registry.active_ids().is_empty());
}

#[test]
fn prune_drops_only_stale_entries() {
    let registry = SessionRegistry::default();
    let keep = registered_session(3, &registry);
    let stale = registered_session(4, &registry);
    drop(stale);

    registry.prune();

    assert_eq!(registry.active_ids(), vec![keep.id()]);
}

#[test]
fn remove_forgets_a_session_explicitly() {
    let registry = SessionRegistry::default();
    let session = registered_session(5, &registry);

    registry.remove(&session.id());

    assert!(registry.get(&session.id()).is_none());
}
