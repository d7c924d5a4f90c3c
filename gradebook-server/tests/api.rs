//! End-to-end API tests driving the full router over a temp data directory.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;

use gradebook_server::{AppState, create_router};
use gradebook_store::JsonStore;

fn test_server() -> (TempDir, TestServer) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonStore::open(dir.path()).unwrap());
    let router = create_router(Arc::new(AppState::new(store)));
    (dir, TestServer::new(router).unwrap())
}

/// The reference walkthrough: one subject with two tasks, one enrolled
/// student, one task completed, per-subject stats at 50%.
#[tokio::test]
async fn subject_progress_walkthrough() {
    let (_dir, server) = test_server();

    server
        .post("/api/subjects")
        .json(&json!({
            "id": "math",
            "name": "Math",
            "levels": [{
                "id": "grade_1",
                "name": "Grade 1",
                "chapters": [{
                    "id": "numbers",
                    "name": "Numbers",
                    "tasks": [
                        {"id": "t1", "name": "Count to 10"},
                        {"id": "t2", "name": "Compare numbers"}
                    ]
                }]
            }]
        }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/students")
        .json(&json!({"id": "s1", "name": "Ada", "subjects": ["math"]}))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/students/s1/progress")
        .json(&json!({
            "studentId": "s1",
            "subjects": {
                "math": {
                    "currentLevel": "grade_1",
                    "totalProgress": 0,
                    "tasks": {"t1": {"status": "completed"}}
                }
            }
        }))
        .await
        .assert_status_ok();

    let stats: Value = server
        .get("/api/students/s1/subjects/math/progress")
        .await
        .json();
    assert_eq!(stats, json!({"progress": 50, "completed": 1, "total": 2}));

    // The same walk drives the roster listing's overallProgress.
    let students: Value = server.get("/api/students").await.json();
    assert_eq!(students[0]["overallProgress"], 50);

    // And the roster-wide average.
    let overall: Value = server.get("/api/stats/overall").await.json();
    assert_eq!(overall["totalStudents"], 1);
    assert_eq!(overall["totalSubjects"], 1);
    assert_eq!(overall["averageProgress"], 50.0);
}

/// Re-enrollment through PUT: progress follows the new subject set on the
/// next read, dropping old task data and default-initializing new entries.
#[tokio::test]
async fn progress_follows_enrollment_changes() {
    let (_dir, server) = test_server();

    server
        .post("/api/students")
        .json(&json!({"id": "s1", "name": "Ada", "subjects": ["a", "b"]}))
        .await
        .assert_status(StatusCode::CREATED);

    // Record task data under subject a.
    server
        .post("/api/students/s1/progress")
        .json(&json!({
            "studentId": "s1",
            "subjects": {
                "a": {"currentLevel": "grade_1", "totalProgress": 0,
                      "tasks": {"t1": {"status": "completed"}}},
                "b": {"currentLevel": "grade_1", "totalProgress": 0, "tasks": {}}
            }
        }))
        .await
        .assert_status_ok();

    server
        .put("/api/students/s1")
        .json(&json!({"subjects": ["b", "c"]}))
        .await
        .assert_status_ok();

    let progress: Value = server.get("/api/students/s1/progress").await.json();
    let subjects = progress["subjects"].as_object().unwrap();
    assert_eq!(subjects.len(), 2);
    assert!(subjects.contains_key("b"));
    assert!(subjects.contains_key("c"));
    assert!(!subjects.contains_key("a"));
    assert_eq!(progress["subjects"]["c"]["tasks"], json!({}));
}

/// Saving progress does not reconcile; the next read does.
#[tokio::test]
async fn save_keeps_stale_subjects_until_next_read() {
    let (dir, server) = test_server();

    server
        .post("/api/students")
        .json(&json!({"id": "s1", "name": "Ada", "subjects": ["math"]}))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/students/s1/progress")
        .json(&json!({
            "studentId": "s1",
            "subjects": {
                "dropped": {"currentLevel": "grade_1", "totalProgress": 0, "tasks": {}}
            }
        }))
        .await
        .assert_status_ok();

    // The file on disk still carries the stale subject after the save.
    let raw = std::fs::read_to_string(dir.path().join("progress.json")).unwrap();
    let book: Value = serde_json::from_str(&raw).unwrap();
    assert!(book["s1"]["subjects"].get("dropped").is_some());

    // Reading repairs the entry.
    let progress: Value = server.get("/api/students/s1/progress").await.json();
    assert!(progress["subjects"].get("dropped").is_none());
    assert!(progress["subjects"].get("math").is_some());
}

/// A student with no enrollments reports 0 everywhere, never an error.
#[tokio::test]
async fn zero_task_universes_report_zero() {
    let (_dir, server) = test_server();

    server
        .post("/api/students")
        .json(&json!({"id": "s1", "name": "Ada"}))
        .await
        .assert_status(StatusCode::CREATED);

    let student: Value = server.get("/api/students/s1").await.json();
    assert_eq!(student["overallProgress"], 0);

    let stats: Value = server
        .get("/api/students/s1/subjects/anything/progress")
        .await
        .json();
    assert_eq!(stats, json!({"progress": 0, "completed": 0, "total": 0}));
}

/// Batch enrollment is visible through the progress read that follows.
#[tokio::test]
async fn batch_enroll_then_read_progress() {
    let (_dir, server) = test_server();

    server
        .post("/api/subjects")
        .json(&json!({"id": "science", "name": "Science"}))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/students")
        .json(&json!({"id": "s1", "name": "Ada"}))
        .await
        .assert_status(StatusCode::CREATED);

    let response: Value = server
        .post("/api/batch/add-subject-to-students")
        .json(&json!({"subjectId": "science", "studentIds": ["s1"]}))
        .await
        .json();
    assert_eq!(response["successCount"], 1);

    // Enrolling again is a silent skip, not a duplicate.
    let response: Value = server
        .post("/api/batch/add-subject-to-students")
        .json(&json!({"subjectId": "science", "studentIds": ["s1"]}))
        .await
        .json();
    assert_eq!(response["successCount"], 0);

    let student: Value = server.get("/api/students/s1").await.json();
    assert_eq!(student["subjects"], json!(["science"]));

    let progress: Value = server.get("/api/students/s1/progress").await.json();
    assert!(progress["subjects"].get("science").is_some());
}

/// Documents survive a full server restart over the same data directory.
#[tokio::test]
async fn state_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        let server = TestServer::new(create_router(Arc::new(AppState::new(store)))).unwrap();
        server
            .post("/api/students")
            .json(&json!({"id": "s1", "name": "Ada"}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let store = Arc::new(JsonStore::open(dir.path()).unwrap());
    let server = TestServer::new(create_router(Arc::new(AppState::new(store)))).unwrap();
    let students: Value = server.get("/api/students").await.json();
    assert_eq!(students.as_array().unwrap().len(), 1);
    assert_eq!(students[0]["name"], "Ada");
}

/// The SPA fallback serves the embedded index for non-API paths.
#[tokio::test]
async fn fallback_serves_web_ui() {
    let (_dir, server) = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Gradebook"));

    let response = server.get("/some/client/route").await;
    response.assert_status_ok();
}
