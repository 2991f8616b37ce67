use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::careers::CareersView;
use crate::config::SessionConfig;

/// Opaque per-visitor key; selections are only ever read back under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What one visitor currently has selected on the careers portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub view: CareersView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_job: Option<String>,
}

/// Storage for session state; unknown sessions read as the default state.
pub trait SessionStore: Send + Sync {
    fn load(&self, id: &SessionId) -> Result<SessionState, SessionError>;
    fn save(&self, id: &SessionId, state: SessionState) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local session map, capped in size and expiring idle visitors.
///
/// Evicted sessions simply read back as the default state.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Cache<SessionId, SessionState>,
}

impl InMemorySessionStore {
    pub fn new(config: SessionConfig) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_idle(config.idle_timeout)
            .build();
        Self { sessions }
    }

    /// Number of live sessions once pending evictions have been applied.
    pub fn len(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: &SessionId) -> Result<SessionState, SessionError> {
        Ok(self.sessions.get(id).unwrap_or_default())
    }

    fn save(&self, id: &SessionId, state: SessionState) -> Result<(), SessionError> {
        self.sessions.insert(id.clone(), state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn unknown_session_reads_default_state() {
        let store = InMemorySessionStore::default();
        let state = store
            .load(&SessionId("nobody".to_string()))
            .expect("loads");
        assert_eq!(state, SessionState::default());
        assert!(store.is_empty());
    }

    #[test]
    fn saved_state_is_keyed_by_session() {
        let store = InMemorySessionStore::default();
        let id = SessionId("visitor".to_string());
        store
            .save(
                &id,
                SessionState {
                    view: CareersView::ApplyNow,
                    selected_job: Some("Lead Crochet Artisan".to_string()),
                },
            )
            .expect("saves");

        assert_eq!(store.load(&id).expect("loads").view, CareersView::ApplyNow);
        assert_eq!(
            store
                .load(&SessionId("other".to_string()))
                .expect("loads")
                .view,
            CareersView::Welcome
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_never_grows_past_capacity() {
        let store = InMemorySessionStore::new(SessionConfig {
            max_entries: 50,
            idle_timeout: Duration::from_secs(600),
        });
        for _ in 0..500 {
            store
                .save(
                    &SessionId::generate(),
                    SessionState {
                        view: CareersView::About,
                        selected_job: None,
                    },
                )
                .expect("saves");
        }
        assert!(store.len() <= 50, "len = {}", store.len());
    }

    #[test]
    fn idle_sessions_expire() {
        let store = InMemorySessionStore::new(SessionConfig {
            max_entries: 10,
            idle_timeout: Duration::from_millis(50),
        });
        let id = SessionId("sleepy".to_string());
        store
            .save(
                &id,
                SessionState {
                    view: CareersView::OurTeam,
                    selected_job: None,
                },
            )
            .expect("saves");

        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(store.load(&id).expect("loads"), SessionState::default());
    }
}
