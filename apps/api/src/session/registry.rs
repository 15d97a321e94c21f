//! In-memory registry of live sessions, keyed by an opaque id handed to the
//! client at creation. Nothing survives a process restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::session::gateway::SignupGateway;
use crate::session::store::{SessionStore, TitleObserver, ERROR_AUTO_CLEAR};

pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Arc<SessionStore>>>,
    gateway: Arc<dyn SignupGateway>,
    titles: Arc<dyn TitleObserver>,
    error_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(gateway: Arc<dyn SignupGateway>, titles: Arc<dyn TitleObserver>) -> Self {
        SessionRegistry {
            sessions: Mutex::new(HashMap::new()),
            gateway,
            titles,
            error_ttl: ERROR_AUTO_CLEAR,
        }
    }

    /// Opens a fresh session in the initial state.
    pub fn create(&self) -> (Uuid, Arc<SessionStore>) {
        let id = Uuid::new_v4();
        let store = SessionStore::with_error_ttl(
            Arc::clone(&self.gateway),
            Arc::clone(&self.titles),
            self.error_ttl,
        );
        self.sessions.lock().insert(id, Arc::clone(&store));
        debug!(session = %id, "session opened");
        (id, store)
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<SessionStore>> {
        self.sessions.lock().get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::catalog::View;
    use crate::session::gateway::SimulatedSignupGateway;
    use crate::session::store::TracingTitleObserver;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Arc::new(SimulatedSignupGateway), Arc::new(TracingTitleObserver))
    }

    #[tokio::test]
    async fn test_created_session_is_retrievable() {
        let registry = registry();
        let (id, _) = registry.create();
        assert!(registry.get(id).is_some());
    }

    #[tokio::test]
    async fn test_unknown_id_is_absent() {
        assert!(registry().get(Uuid::new_v4()).is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let registry = registry();
        let (_, a) = registry.create();
        let (_, b) = registry.create();

        a.navigate(View::JobSearch);
        assert_eq!(a.snapshot().current_view, View::JobSearch);
        assert_eq!(b.snapshot().current_view, View::Landing);
    }
}
