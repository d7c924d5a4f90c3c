//! Subject catalog CRUD.

use std::sync::Arc;

use serde::Deserialize;

use gradebook_models::{Level, Subject, SubjectPatch};
use gradebook_store::{Document, JsonStore};

use crate::error::{CoreError, Result};

/// Payload for creating a subject. The id is caller-supplied and, together
/// with `name`, required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub levels: Option<Vec<Level>>,
}

/// CRUD over the subjects document.
pub struct SubjectCatalog {
    store: Arc<JsonStore>,
}

impl SubjectCatalog {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// All subjects, in stored order.
    pub async fn list(&self) -> Result<Vec<Subject>> {
        Ok(self.store.read(Document::Subjects).await?)
    }

    /// Look up one subject by id.
    pub async fn get(&self, id: &str) -> Result<Subject> {
        let subjects = self.list().await?;
        subjects
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::SubjectNotFound(id.to_string()))
    }

    /// Add a subject to the catalog.
    pub async fn create(&self, new: NewSubject) -> Result<Subject> {
        let id = new
            .id
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("id and name are required".into()))?;
        let name = new
            .name
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("id and name are required".into()))?;

        let _guard = self.store.lock(Document::Subjects).await;
        let mut subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;

        if subjects.iter().any(|s| s.id == id) {
            return Err(CoreError::DuplicateId(id));
        }

        let subject = Subject {
            id,
            name,
            icon: new.icon.unwrap_or_else(|| "📚".to_string()),
            color: new.color.unwrap_or_else(|| "#666".to_string()),
            description: new.description.unwrap_or_default(),
            levels: new.levels.unwrap_or_default(),
        };

        subjects.push(subject.clone());
        self.store.write(Document::Subjects, &subjects).await?;

        tracing::info!(subject = %subject.id, "created subject");
        Ok(subject)
    }

    /// Merge a partial update onto an existing subject.
    pub async fn update(&self, id: &str, patch: SubjectPatch) -> Result<Subject> {
        if patch.is_empty() {
            return Err(CoreError::Validation("no fields to update".into()));
        }

        let _guard = self.store.lock(Document::Subjects).await;
        let mut subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;

        let subject = subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::SubjectNotFound(id.to_string()))?;

        patch.apply(subject);
        let updated = subject.clone();

        self.store.write(Document::Subjects, &subjects).await?;
        Ok(updated)
    }

    /// Remove a subject. Deleting an unknown id succeeds. Students keep the
    /// subject in their enrollment list until it is updated away; the
    /// aggregator simply skips ids it cannot resolve.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.store.lock(Document::Subjects).await;
        let mut subjects: Vec<Subject> = self.store.read(Document::Subjects).await?;
        subjects.retain(|s| s.id != id);
        self.store.write(Document::Subjects, &subjects).await?;
        Ok(())
    }
}
