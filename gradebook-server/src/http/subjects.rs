//! Subject API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use gradebook_core::NewSubject;
use gradebook_models::{Subject, SubjectPatch};

use super::api::MessageResponse;
use super::error::ApiError;
use crate::AppState;

/// GET /api/subjects
pub async fn list_subjects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Subject>>, ApiError> {
    Ok(Json(state.subjects.list().await?))
}

/// GET /api/subjects/:id
pub async fn get_subject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError> {
    Ok(Json(state.subjects.get(&id).await?))
}

/// POST /api/subjects
pub async fn create_subject(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewSubject>,
) -> Result<impl IntoResponse, ApiError> {
    let subject = state.subjects.create(new).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// PUT /api/subjects/:id
pub async fn update_subject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<SubjectPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.subjects.update(&id, patch).await?;
    Ok(Json(MessageResponse::new("Subject updated successfully")))
}

/// DELETE /api/subjects/:id
pub async fn delete_subject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.subjects.delete(&id).await?;
    Ok(Json(MessageResponse::new("Subject deleted successfully")))
}
