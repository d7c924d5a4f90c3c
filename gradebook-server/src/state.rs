//! Shared application state for the gradebook server

use std::sync::Arc;

use chrono::{DateTime, Utc};

use gradebook_core::{ProgressTracker, StudentDirectory, SubjectCatalog};
use gradebook_store::JsonStore;

/// Shared application state accessible by all handlers
pub struct AppState {
    /// CRUD over the student roster
    pub students: StudentDirectory,
    /// CRUD over the subject catalog
    pub subjects: SubjectCatalog,
    /// Progress reconciliation and aggregation
    pub progress: ProgressTracker,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create the state over one shared document store.
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self {
            students: StudentDirectory::new(Arc::clone(&store)),
            subjects: SubjectCatalog::new(Arc::clone(&store)),
            progress: ProgressTracker::new(store),
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_app_state_new() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        let state = AppState::new(store);
        assert!(state.uptime_seconds() >= 0);
        assert!(state.students.list().await.unwrap().is_empty());
    }
}
