//! HTTP server module

mod api;
mod error;
mod progress;
mod static_files;
mod stats;
mod students;
mod subjects;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub use api::HealthResponse;
pub use error::{ApiError, ErrorResponse};
pub use students::{BatchEnrollResponse, StudentWithProgress};

/// Create the HTTP router with all routes configured.
///
/// The API lives under `/api`; any other path falls through to the embedded
/// web UI. CORS is wide open, matching a local-tool deployment.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route(
            "/api/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/api/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/api/students/:id/progress",
            get(progress::get_progress).post(progress::save_progress),
        )
        .route(
            "/api/students/:id/subjects/:subject_id/progress",
            get(progress::get_subject_progress),
        )
        .route(
            "/api/subjects",
            get(subjects::list_subjects).post(subjects::create_subject),
        )
        .route(
            "/api/subjects/:id",
            get(subjects::get_subject)
                .put(subjects::update_subject)
                .delete(subjects::delete_subject),
        )
        .route("/api/stats/overall", get(stats::overall_stats))
        .route(
            "/api/batch/add-subject-to-students",
            post(students::add_subject_to_students),
        )
        .fallback(static_files::static_handler)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use gradebook_store::JsonStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        let router = create_router(Arc::new(AppState::new(store)));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
    }
}
