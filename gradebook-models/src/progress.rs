//! Progress document types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_LEVEL;

/// The whole progress document: one entry per student, keyed by student id.
pub type ProgressBook = HashMap<String, StudentProgress>;

/// Per-student progress across all enrolled subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub student_id: String,
    #[serde(default)]
    pub subjects: HashMap<String, SubjectProgress>,
}

impl StudentProgress {
    /// An entry with no subject progress yet.
    pub fn empty(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            subjects: HashMap::new(),
        }
    }
}

/// Progress within one subject.
///
/// `total_progress` is a client-facing cache; the aggregator never trusts it
/// and always recounts from `tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    pub current_level: String,
    #[serde(default)]
    pub total_progress: u32,
    #[serde(default)]
    pub tasks: HashMap<String, TaskProgress>,
}

impl Default for SubjectProgress {
    fn default() -> Self {
        Self {
            current_level: DEFAULT_LEVEL.to_string(),
            total_progress: 0,
            tasks: HashMap::new(),
        }
    }
}

/// Progress on a single task.
///
/// Clients attach their own bookkeeping (timestamps, attempt counts, ...)
/// alongside `status`; those fields are preserved verbatim across saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProgress {
    pub status: TaskStatus,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TaskProgress {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            extra: HashMap::new(),
        }
    }
}

/// Completion state of a task. Only `Completed` counts toward percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}
