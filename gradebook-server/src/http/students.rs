//! Student API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use gradebook_core::{CoreError, NewStudent};
use gradebook_models::{Student, StudentPatch};

use super::api::MessageResponse;
use super::error::ApiError;
use crate::AppState;

/// A student plus their computed overall progress percentage.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithProgress {
    #[serde(flatten)]
    pub student: Student,
    pub overall_progress: u32,
}

/// Request body for POST /api/batch/add-subject-to-students
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEnrollRequest {
    pub subject_id: Option<String>,
    pub student_ids: Option<Vec<String>>,
}

/// Response for POST /api/batch/add-subject-to-students
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEnrollResponse {
    pub message: String,
    pub success_count: usize,
    pub total_count: usize,
}

/// GET /api/students - list all students with their progress
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentWithProgress>>, ApiError> {
    let students = state.students.list().await?;

    let mut with_progress = Vec::with_capacity(students.len());
    for student in students {
        let overall_progress = state.progress.overall_progress(&student.id).await?;
        with_progress.push(StudentWithProgress {
            student,
            overall_progress,
        });
    }

    Ok(Json(with_progress))
}

/// GET /api/students/:id
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StudentWithProgress>, ApiError> {
    let student = state.students.get(&id).await?;
    let overall_progress = state.progress.overall_progress(&id).await?;
    Ok(Json(StudentWithProgress {
        student,
        overall_progress,
    }))
}

/// POST /api/students
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewStudent>,
) -> Result<impl IntoResponse, ApiError> {
    let student = state.students.create(new).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/students/:id
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.students.update(&id, patch).await?;
    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// DELETE /api/students/:id
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.students.delete(&id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// POST /api/batch/add-subject-to-students
pub async fn add_subject_to_students(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchEnrollRequest>,
) -> Result<Json<BatchEnrollResponse>, ApiError> {
    let subject_id = request.subject_id.filter(|s| !s.trim().is_empty());
    let student_ids = request.student_ids.filter(|ids| !ids.is_empty());
    let (Some(subject_id), Some(student_ids)) = (subject_id, student_ids) else {
        return Err(CoreError::Validation(
            "Subject ID and student IDs are required".into(),
        )
        .into());
    };

    let outcome = state
        .students
        .enroll_many(&subject_id, &student_ids)
        .await?;

    Ok(Json(BatchEnrollResponse {
        message: format!(
            "Successfully added subject to {} students",
            outcome.success_count
        ),
        success_count: outcome.success_count,
        total_count: outcome.total_count,
    }))
}
