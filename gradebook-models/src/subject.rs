//! Curriculum tree types: Subject → Level → Chapter → Task.

use serde::{Deserialize, Serialize};

/// A subject and its full curriculum tree.
///
/// Subject ids are caller-supplied and are the uniqueness key for the
/// subjects document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl Subject {
    /// Iterate every task in the curriculum tree, in document order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.levels
            .iter()
            .flat_map(|level| level.chapters.iter())
            .flat_map(|chapter| chapter.tasks.iter())
    }

    /// Total number of tasks across all levels and chapters.
    pub fn task_count(&self) -> usize {
        self.tasks().count()
    }
}

/// One level of a subject, e.g. a school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A chapter groups related tasks inside a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A single learning task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub task_type: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub estimated_time: u32,
    #[serde(default)]
    pub difficulty: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Partial update for a subject. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Level>>,
}

impl SubjectPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.color.is_none()
            && self.description.is_none()
            && self.levels.is_none()
    }

    /// Apply the patch onto an existing subject, field by field.
    pub fn apply(self, subject: &mut Subject) {
        if let Some(name) = self.name {
            subject.name = name;
        }
        if let Some(icon) = self.icon {
            subject.icon = icon;
        }
        if let Some(color) = self.color {
            subject.color = color;
        }
        if let Some(description) = self.description {
            subject.description = description;
        }
        if let Some(levels) = self.levels {
            subject.levels = levels;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_task_subject() -> Subject {
        Subject {
            id: "math".into(),
            name: "Math".into(),
            icon: "🧮".into(),
            color: "#4285f4".into(),
            description: "Numbers and operations".into(),
            levels: vec![Level {
                id: "grade_1".into(),
                name: "Grade 1".into(),
                chapters: vec![Chapter {
                    id: "numbers".into(),
                    name: "Numbers".into(),
                    description: "Counting up to 100".into(),
                    tasks: vec![
                        Task {
                            id: "t1".into(),
                            name: "Count to 10".into(),
                            task_type: "concept".into(),
                            steps: vec!["count out loud".into()],
                            estimated_time: 30,
                            difficulty: 1,
                            prerequisites: vec![],
                        },
                        Task {
                            id: "t2".into(),
                            name: "Compare numbers".into(),
                            task_type: "skill".into(),
                            steps: vec![],
                            estimated_time: 25,
                            difficulty: 2,
                            prerequisites: vec!["t1".into()],
                        },
                    ],
                }],
            }],
        }
    }

    #[test]
    fn walks_tasks_in_document_order() {
        let subject = two_task_subject();
        let ids: Vec<&str> = subject.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
        assert_eq!(subject.task_count(), 2);
    }

    #[test]
    fn empty_tree_has_no_tasks() {
        let subject = Subject {
            id: "art".into(),
            name: "Art".into(),
            icon: String::new(),
            color: String::new(),
            description: String::new(),
            levels: vec![],
        };
        assert_eq!(subject.task_count(), 0);
    }

    #[test]
    fn task_type_round_trips_as_type() {
        let subject = two_task_subject();
        let json = serde_json::to_value(&subject).unwrap();
        let first = &json["levels"][0]["chapters"][0]["tasks"][0];
        assert_eq!(first["type"], "concept");

        let back: Subject = serde_json::from_value(json).unwrap();
        assert_eq!(back, subject);
    }

    #[test]
    fn patch_replaces_levels_wholesale() {
        let mut subject = two_task_subject();
        let patch = SubjectPatch {
            levels: Some(vec![]),
            ..Default::default()
        };
        patch.apply(&mut subject);
        assert!(subject.levels.is_empty());
        assert_eq!(subject.name, "Math");
    }
}
