use std::sync::Arc;

use crate::applications::SampleApplications;
use crate::content::{StaticContentStore, DEFAULT_HERO_IMAGE_URL};
use crate::pages::careers::CareersPortal;
use crate::pages::session::{
    InMemorySessionStore, SessionError, SessionId, SessionState, SessionStore,
};

pub(super) use crate::test_support::{read_json_body, OfflineDirectory};

pub(super) struct BrokenSessions;

impl SessionStore for BrokenSessions {
    fn load(&self, _id: &SessionId) -> Result<SessionState, SessionError> {
        Err(SessionError::Unavailable("session backend down".to_string()))
    }

    fn save(&self, _id: &SessionId, _state: SessionState) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("session backend down".to_string()))
    }
}

pub(super) type SamplePortal = CareersPortal<InMemorySessionStore, SampleApplications>;

pub(super) fn portal() -> Arc<SamplePortal> {
    Arc::new(CareersPortal::new(
        Arc::new(StaticContentStore::new()),
        Arc::new(InMemorySessionStore::default()),
        Arc::new(SampleApplications::generate().expect("sample set builds")),
        DEFAULT_HERO_IMAGE_URL,
    ))
}

pub(super) fn session(name: &str) -> SessionId {
    SessionId(name.to_string())
}
