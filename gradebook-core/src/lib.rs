//! Core library for gradebook.
//!
//! Everything here is stateless across requests: each operation reads the
//! documents it needs from the [`JsonStore`](gradebook_store::JsonStore),
//! applies its change, and writes the whole document back. Mutations hold
//! the store's per-document guard across the read-modify-write cycle.
//!
//! - [`StudentDirectory`] / [`SubjectCatalog`]: CRUD over the two rosters
//! - [`ProgressTracker`]: keeps progress entries in sync with enrollments
//!   and computes completion percentages from the curriculum tree

mod error;
mod progress;
mod students;
mod subjects;

pub use error::{CoreError, Result};
pub use progress::{OverallStats, ProgressTracker, SubjectProgressStats};
pub use students::{EnrollmentOutcome, NewStudent, StudentDirectory};
pub use subjects::{NewSubject, SubjectCatalog};

/// Today's date as the `YYYY-MM-DD` string stored in student records.
pub(crate) fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
