use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::Session;

/// Registry of active sessions, shared by every request cycle.
///
/// Readers run concurrently; insertions and removals take the write lock, so
/// a lookup never observes a half-inserted session.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session. An existing session with the same id is replaced.
    pub fn add(&self, session: Session) {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if sessions.insert(session.id().to_string(), session).is_some() {
            tracing::debug!("Replaced session with duplicate id");
        }
    }

    /// Returns a snapshot of the session with this id.
    pub fn find_session(&self, id: &str) -> Option<Session> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Removes and returns the session with this id.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
