//! Registry of live sessions.
//!
//! `SessionRegistry` stores non-owning weak references to [`Session`]s so
//! transport adapters and the event layer can look up the session for a
//! logical connection without keeping torn-down sessions alive. Dead
//! entries are pruned opportunistically or lazily at lookup time.

use std::sync::{Arc, Weak};

use dashmap::DashMap;

use super::{Session, id::SessionId};

/// Concurrent registry of sessions keyed by [`SessionId`].
#[derive(Default)]
pub struct SessionRegistry(DashMap<SessionId, Weak<Session>>);

impl SessionRegistry {
    /// Retrieve the session for `id` if it is still alive.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<Arc<Session>> {
        let guard = self.0.get(id);
        let session = guard.as_ref().and_then(|weak| weak.upgrade());
        drop(guard);
        if session.is_none() {
            self.0.remove_if(id, |_, weak| weak.strong_count() == 0);
        }
        session
    }

    /// Register a newly created session.
    pub fn insert(&self, session: &Arc<Session>) {
        self.0.insert(session.id(), Arc::downgrade(session));
    }

    /// Remove a session, typically on teardown.
    pub fn remove(&self, id: &SessionId) { self.0.remove(id); }

    /// Drop all stale weak references.
    pub fn prune(&self) { self.0.retain(|_, weak| weak.strong_count() > 0); }

    /// Prune stale entries, then return the IDs of the live sessions.
    #[must_use]
    pub fn active_ids(&self) -> Vec<SessionId> {
        let mut ids = Vec::with_capacity(self.0.len());
        self.0.retain(|id, weak| {
            if weak.strong_count() > 0 {
                ids.push(*id);
                true
            } else {
                false
            }
        });
        ids
    }
}
