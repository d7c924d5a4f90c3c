//! Student roster CRUD and batch enrollment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use gradebook_models::{Student, StudentPatch};
use gradebook_store::{Document, JsonStore};

use crate::error::{CoreError, Result};
use crate::today;

/// Payload for creating a student. Only `name` is required; the id is
/// generated from the current time when not supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub grade: Option<String>,
    pub notes: Option<String>,
}

/// Result of a batch enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentOutcome {
    pub success_count: usize,
    pub total_count: usize,
}

/// CRUD over the students document.
pub struct StudentDirectory {
    store: Arc<JsonStore>,
}

impl StudentDirectory {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// All students, in stored order.
    pub async fn list(&self) -> Result<Vec<Student>> {
        Ok(self.store.read(Document::Students).await?)
    }

    /// Look up one student by id.
    pub async fn get(&self, id: &str) -> Result<Student> {
        let students = self.list().await?;
        students
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::StudentNotFound(id.to_string()))
    }

    /// Add a student to the roster.
    ///
    /// Ids default to `student_{unix_seconds}`; creating twice within the
    /// same second therefore collides and reports `DuplicateId` rather than
    /// overwriting.
    pub async fn create(&self, new: NewStudent) -> Result<Student> {
        let name = new
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("name is required".into()))?;

        let _guard = self.store.lock(Document::Students).await;
        let mut students: Vec<Student> = self.store.read(Document::Students).await?;

        let id = new
            .id
            .unwrap_or_else(|| format!("student_{}", chrono::Utc::now().timestamp()));
        if students.iter().any(|s| s.id == id) {
            return Err(CoreError::DuplicateId(id));
        }

        let stamp = today();
        let student = Student {
            id,
            name,
            avatar: new.avatar.unwrap_or_else(|| "👦".to_string()),
            subjects: new.subjects.unwrap_or_default(),
            grade: new.grade.unwrap_or_else(|| "grade_1".to_string()),
            notes: new.notes.unwrap_or_default(),
            created_at: stamp.clone(),
            last_update: stamp,
        };

        students.push(student.clone());
        self.store.write(Document::Students, &students).await?;

        tracing::info!(student = %student.id, "created student");
        Ok(student)
    }

    /// Merge a partial update onto an existing student and refresh
    /// `last_update`.
    pub async fn update(&self, id: &str, patch: StudentPatch) -> Result<Student> {
        if patch.is_empty() {
            return Err(CoreError::Validation("no fields to update".into()));
        }

        let _guard = self.store.lock(Document::Students).await;
        let mut students: Vec<Student> = self.store.read(Document::Students).await?;

        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::StudentNotFound(id.to_string()))?;

        patch.apply(student);
        student.last_update = today();
        let updated = student.clone();

        self.store.write(Document::Students, &students).await?;
        Ok(updated)
    }

    /// Remove a student. Deleting an unknown id succeeds; the roster is
    /// simply unchanged. The student's progress entry is left behind until
    /// something else prunes it.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.store.lock(Document::Students).await;
        let mut students: Vec<Student> = self.store.read(Document::Students).await?;
        students.retain(|s| s.id != id);
        self.store.write(Document::Students, &students).await?;
        Ok(())
    }

    /// Enroll many students in one subject.
    ///
    /// Unknown student ids and students already enrolled are skipped, not
    /// errors. The subject id is not checked against the catalog.
    pub async fn enroll_many(
        &self,
        subject_id: &str,
        student_ids: &[String],
    ) -> Result<EnrollmentOutcome> {
        let _guard = self.store.lock(Document::Students).await;
        let mut students: Vec<Student> = self.store.read(Document::Students).await?;

        let mut success_count = 0;
        for id in student_ids {
            if let Some(student) = students.iter_mut().find(|s| &s.id == id) {
                if !student.is_enrolled(subject_id) {
                    student.subjects.push(subject_id.to_string());
                    student.last_update = today();
                    success_count += 1;
                }
            }
        }

        if success_count > 0 {
            self.store.write(Document::Students, &students).await?;
        }

        tracing::info!(
            subject = subject_id,
            enrolled = success_count,
            requested = student_ids.len(),
            "batch enrollment"
        );
        Ok(EnrollmentOutcome {
            success_count,
            total_count: student_ids.len(),
        })
    }
}
