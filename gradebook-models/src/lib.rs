//! Data model for gradebook.
//!
//! This crate defines the three documents the backend persists:
//! - Students: the roster, each student carrying their subject enrollments
//! - Subjects: the curriculum tree (Subject → Level → Chapter → Task)
//! - Progress: per-student task status, keyed by student id
//!
//! All types serialize with camelCase field names to match the JSON the
//! web UI exchanges with the API.

mod progress;
mod student;
mod subject;

pub use progress::{ProgressBook, StudentProgress, SubjectProgress, TaskProgress, TaskStatus};
pub use student::{Student, StudentPatch};
pub use subject::{Chapter, Level, Subject, SubjectPatch, Task};

/// Level id assigned to a freshly initialized subject progress entry.
pub const DEFAULT_LEVEL: &str = "grade_1";
