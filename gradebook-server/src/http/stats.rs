//! Statistics API handlers

use std::sync::Arc;

use axum::{Json, extract::State};

use gradebook_core::OverallStats;

use super::error::ApiError;
use crate::AppState;

/// GET /api/stats/overall
pub async fn overall_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OverallStats>, ApiError> {
    Ok(Json(state.progress.overall_stats().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use gradebook_store::JsonStore;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn stats_reflect_roster_counts() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        let router = crate::create_router(Arc::new(AppState::new(store)));
        let server = TestServer::new(router).unwrap();

        let stats: OverallStats = server.get("/api/stats/overall").await.json();
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.average_progress, 0.0);

        server
            .post("/api/students")
            .json(&json!({"id": "s1", "name": "Ada"}))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
        server
            .post("/api/subjects")
            .json(&json!({"id": "math", "name": "Math"}))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let stats: OverallStats = server.get("/api/stats/overall").await.json();
        assert_eq!(stats.total_students, 1);
        assert_eq!(stats.total_subjects, 1);
    }
}
