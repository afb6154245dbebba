use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::PlannerSession;

/// In-memory session store. Sessions are keyed by uuid and live for the
/// process lifetime; there is no persistence layer behind this.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, PlannerSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh empty session and returns its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, PlannerSession::default());
        id
    }

    /// Snapshot of a session's current state.
    pub fn get(&self, id: &Uuid) -> Option<PlannerSession> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(id)
            .cloned()
    }

    /// Applies `f` to the session under the write lock. Returns `None` when
    /// the session does not exist.
    pub fn update<T>(&self, id: &Uuid, f: impl FnOnce(&mut PlannerSession) -> T) -> Option<T> {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .get_mut(id)
            .map(f)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseDeadline;
    use chrono::NaiveDate;

    #[test]
    fn create_and_get_session() {
        let store = SessionStore::new();
        let id = store.create();

        let session = store.get(&id).expect("session exists");
        assert!(session.deadlines.is_empty());
        assert!(session.study_plan.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn update_mutates_in_place() {
        let store = SessionStore::new();
        let id = store.create();
        let today: NaiveDate = "2024-01-10".parse().expect("valid date");

        let index = store
            .update(&id, |session| {
                session.deadlines.push(CourseDeadline::new_for(today));
                session.deadlines.len() - 1
            })
            .expect("session exists");
        assert_eq!(index, 0);

        let session = store.get(&id).expect("session exists");
        assert_eq!(session.deadlines.len(), 1);
        assert_eq!(session.deadlines[0].due_date, today);
        assert!(session.deadlines[0].course.is_empty());
    }

    #[test]
    fn update_unknown_session_is_none() {
        let store = SessionStore::new();
        let result = store.update(&Uuid::new_v4(), |s| s.preferences = "x".to_string());
        assert!(result.is_none());
    }
}
