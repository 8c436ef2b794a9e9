//! In-memory registry of live chat sessions.
//!
//! Sessions are created on demand and dropped on teardown or once they have
//! been idle too long; nothing is persisted. Each session sits behind its own async mutex so that one
//! interaction finishes before the next one on the same session begins,
//! while different sessions proceed independently.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use learnix_types::chat::WindowConfig;
use learnix_types::error::SessionError;

use super::session::ChatSession;

/// Shared handle to one session.
pub type SharedSession = Arc<Mutex<ChatSession>>;

/// Concurrent map of session id to session.
///
/// Cloning is cheap and every clone sees the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, SharedSession>>,
    windows: WindowConfig,
}

impl SessionStore {
    /// Create an empty store whose new sessions use `windows`.
    pub fn new(windows: WindowConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            windows,
        }
    }

    /// Start a new session and return its id with a handle to it.
    pub fn create(&self) -> (Uuid, SharedSession) {
        let session = ChatSession::new(self.windows);
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&shared));
        tracing::debug!(session_id = %id, "Session created");
        (id, shared)
    }

    /// Look up a session by id.
    ///
    /// The returned handle is cloned out of the map so no shard lock is held
    /// while the caller awaits the session mutex.
    pub fn get(&self, id: &Uuid) -> Result<SharedSession, SessionError> {
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(SessionError::NotFound(*id))
    }

    /// Tear down a session, discarding its history.
    pub fn remove(&self, id: &Uuid) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|_| tracing::debug!(session_id = %id, "Session removed"))
            .ok_or(SessionError::NotFound(*id))
    }

    /// Drop every session idle for longer than `ttl`. Returns how many
    /// were evicted.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let cutoff = Utc::now()
            .checked_sub_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.evict_inactive_before(cutoff)
    }

    /// Drop every session whose last activity is older than `cutoff`.
    ///
    /// A session whose mutex is held is mid-interaction and always kept.
    pub fn evict_inactive_before(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|id, shared| match shared.try_lock() {
            Ok(session) if session.idle_since() < cutoff => {
                tracing::debug!(session_id = %id, "Idle session evicted");
                false
            }
            _ => true,
        });
        before.saturating_sub(self.sessions.len())
    }

    pub fn windows(&self) -> WindowConfig {
        self.windows
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.len())
            .field("windows", &self.windows)
            .finish()
    }
}
