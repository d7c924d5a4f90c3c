//! Progress reconciliation and aggregation.
//!
//! A student's progress entry must hold exactly one `SubjectProgress` per
//! subject they are currently enrolled in. Enrollment changes through the
//! student CRUD do not touch the progress document; instead every progress
//! read reconciles lazily before returning. Saving progress deliberately
//! skips reconciliation, so a saved document can reference dropped subjects
//! until the next read repairs it.
//!
//! Percentages are always recounted from task status by walking the
//! curriculum tree; the `totalProgress` field stored in the document is
//! client-side state and never trusted here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use gradebook_models::{ProgressBook, Student, StudentProgress, Subject, SubjectProgress, TaskStatus};
use gradebook_store::{Document, JsonStore};

use crate::error::Result;

/// Per-subject completion counts for one student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgressStats {
    /// Percentage of tasks completed, 0-100.
    pub progress: u32,
    pub completed: usize,
    pub total: usize,
}

/// Roster-wide statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_students: usize,
    pub total_subjects: usize,
    /// Mean of per-student overall progress, rounded to one decimal.
    pub average_progress: f64,
}

/// Keeps progress entries aligned with enrollments and computes completion
/// percentages.
pub struct ProgressTracker {
    store: Arc<JsonStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Align a student's progress entry with their current enrollments.
    ///
    /// Unknown students are a no-op: nothing is created. Otherwise missing
    /// subjects get a fresh default entry, entries for dropped subjects are
    /// discarded, and the document is persisted even when nothing changed.
    pub async fn reconcile(&self, student_id: &str) -> Result<()> {
        let students: Vec<Student> = self.store.read(Document::Students).await?;
        let Some(student) = students.into_iter().find(|s| s.id == student_id) else {
            return Ok(());
        };

        let _guard = self.store.lock(Document::Progress).await;
        let mut book: ProgressBook = self.store.read(Document::Progress).await?;
        let mut entry = book
            .remove(student_id)
            .unwrap_or_else(|| StudentProgress::empty(student_id));

        for subject_id in &student.subjects {
            if !entry.subjects.contains_key(subject_id) {
                entry
                    .subjects
                    .insert(subject_id.clone(), SubjectProgress::default());
                tracing::debug!(
                    student = student_id,
                    subject = %subject_id,
                    "initialized subject progress"
                );
            }
        }

        let before = entry.subjects.len();
        entry.subjects.retain(|subject_id, _| student.is_enrolled(subject_id));
        if entry.subjects.len() < before {
            tracing::debug!(
                student = student_id,
                dropped = before - entry.subjects.len(),
                "discarded progress for unenrolled subjects"
            );
        }

        book.insert(student_id.to_string(), entry);
        self.store.write(Document::Progress, &book).await?;
        Ok(())
    }

    /// A student's progress entry, reconciled first. `None` for an unknown
    /// student; no entry is created in that case.
    pub async fn student_progress(&self, student_id: &str) -> Result<Option<StudentProgress>> {
        self.reconcile(student_id).await?;
        let mut book: ProgressBook = self.store.read(Document::Progress).await?;
        Ok(book.remove(student_id))
    }

    /// Overwrite a student's progress entry wholesale.
    ///
    /// No reconciliation and no student-existence check: the saved entry may
    /// reference subjects the student no longer has until the next read.
    pub async fn save_progress(&self, student_id: &str, progress: StudentProgress) -> Result<()> {
        let _guard = self.store.lock(Document::Progress).await;
        let mut book: ProgressBook = self.store.read(Document::Progress).await?;
        book.insert(student_id.to_string(), progress);
        self.store.write(Document::Progress, &book).await?;
        Ok(())
    }

    /// Percentage of tasks completed across every subject in the student's
    /// progress map. Subjects missing from the catalog contribute nothing;
    /// an unknown student or an empty curriculum yields 0.
    pub async fn overall_progress(&self, student_id: &str) -> Result<u32> {
        let Some(progress) = self.student_progress(student_id).await? else {
            return Ok(0);
        };
        let subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;

        let mut total = 0usize;
        let mut completed = 0usize;
        for (subject_id, subject_progress) in &progress.subjects {
            let Some(subject) = subjects.iter().find(|s| &s.id == subject_id) else {
                continue;
            };
            for task in subject.tasks() {
                total += 1;
                if task_completed(subject_progress, &task.id) {
                    completed += 1;
                }
            }
        }

        Ok(percentage(completed, total))
    }

    /// Completion counts for one student within one subject. A subject that
    /// does not exist or has no levels yields all zeros.
    pub async fn subject_progress(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> Result<SubjectProgressStats> {
        let progress = self.student_progress(student_id).await?;
        let subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;

        let Some(subject) = subjects.iter().find(|s| s.id == subject_id) else {
            return Ok(SubjectProgressStats::default());
        };
        if subject.levels.is_empty() {
            return Ok(SubjectProgressStats::default());
        }

        let subject_progress = progress
            .as_ref()
            .and_then(|p| p.subjects.get(subject_id));

        let mut total = 0usize;
        let mut completed = 0usize;
        for task in subject.tasks() {
            total += 1;
            if subject_progress.is_some_and(|sp| task_completed(sp, &task.id)) {
                completed += 1;
            }
        }

        Ok(SubjectProgressStats {
            progress: percentage(completed, total),
            completed,
            total,
        })
    }

    /// Roster-wide statistics: student and subject counts plus the mean
    /// overall progress, rounded to one decimal.
    pub async fn overall_stats(&self) -> Result<OverallStats> {
        let students: Vec<Student> = self.store.read(Document::Students).await?;
        let subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;

        let total_students = students.len();
        let total_subjects = subjects.len();

        let average_progress = if students.is_empty() {
            0.0
        } else {
            let mut sum = 0u32;
            for student in &students {
                sum += self.overall_progress(&student.id).await?;
            }
            let mean = f64::from(sum) / total_students as f64;
            (mean * 10.0).round() / 10.0
        };

        Ok(OverallStats {
            total_students,
            total_subjects,
            average_progress,
        })
    }
}

fn task_completed(subject_progress: &SubjectProgress, task_id: &str) -> bool {
    subject_progress
        .tasks
        .get(task_id)
        .is_some_and(|t| t.status == TaskStatus::Completed)
}

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
