//! Student roster types.

use serde::{Deserialize, Serialize};

/// A student on the roster.
///
/// `subjects` holds the ids of the subjects the student is enrolled in, in
/// enrollment order. `created_at` and `last_update` are `YYYY-MM-DD` date
/// strings; the backend stamps them, clients never send them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_update: String,
}

impl Student {
    /// Whether the student is enrolled in the given subject.
    pub fn is_enrolled(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }
}

/// Partial update for a student. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StudentPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar.is_none()
            && self.subjects.is_none()
            && self.grade.is_none()
            && self.notes.is_none()
    }

    /// Apply the patch onto an existing student, field by field.
    pub fn apply(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(avatar) = self.avatar {
            student.avatar = avatar;
        }
        if let Some(subjects) = self.subjects {
            student.subjects = subjects;
        }
        if let Some(grade) = self.grade {
            student.grade = grade;
        }
        if let Some(notes) = self.notes {
            student.notes = notes;
        }
    }
}
