//! Progress API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use gradebook_core::{CoreError, SubjectProgressStats};
use gradebook_models::StudentProgress;

use super::api::MessageResponse;
use super::error::ApiError;
use crate::AppState;

/// GET /api/students/:id/progress
///
/// Reconciles the entry against the student's current enrollments before
/// returning it.
pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StudentProgress>, ApiError> {
    match state.progress.student_progress(&id).await? {
        Some(progress) => Ok(Json(progress)),
        None => Err(CoreError::StudentNotFound(id).into()),
    }
}

/// POST /api/students/:id/progress
///
/// Whole-entry overwrite. Deliberately does not reconcile; a stale subject
/// in the saved document stays there until the next read.
pub async fn save_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(progress): Json<StudentProgress>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.progress.save_progress(&id, progress).await?;
    Ok(Json(MessageResponse::new("Progress saved successfully")))
}

/// GET /api/students/:id/subjects/:subject_id/progress
pub async fn get_subject_progress(
    State(state): State<Arc<AppState>>,
    Path((id, subject_id)): Path<(String, String)>,
) -> Result<Json<SubjectProgressStats>, ApiError> {
    Ok(Json(
        state.progress.subject_progress(&id, &subject_id).await?,
    ))
}
