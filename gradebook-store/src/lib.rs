//! Whole-document JSON store.
//!
//! All gradebook state lives in three JSON files under one data directory:
//! `students.json`, `subjects.json`, and `progress.json`. The store only
//! reads and writes entire documents; there are no partial updates. Every
//! read goes to disk, so each request sees whatever the last writer
//! persisted.
//!
//! Mutating callers are expected to hold the document's guard across their
//! read-modify-write cycle; see [`JsonStore::lock`].

mod error;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

pub use error::StoreError;

/// The three documents the backend persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Students,
    Subjects,
    Progress,
}

impl Document {
    /// File name of the document within the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Document::Students => "students.json",
            Document::Subjects => "subjects.json",
            Document::Progress => "progress.json",
        }
    }

    fn index(self) -> usize {
        match self {
            Document::Students => 0,
            Document::Subjects => 1,
            Document::Progress => 2,
        }
    }
}

/// File-backed store for the three gradebook documents.
///
/// Holds one mutex per document so that concurrent read-modify-write cycles
/// on the same file cannot interleave and clobber each other. Reads are
/// uncached.
pub struct JsonStore {
    dir: PathBuf,
    locks: [Mutex<()>; 3],
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            dir: dir.display().to_string(),
            source,
        })?;
        Ok(Self {
            dir,
            locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
        })
    }

    /// Path of a document file on disk.
    pub fn path(&self, document: Document) -> PathBuf {
        self.dir.join(document.file_name())
    }

    /// Acquire the mutation guard for a document.
    ///
    /// Callers doing read-modify-write must hold this guard from the read
    /// until the write has completed. Plain reads do not need it.
    pub async fn lock(&self, document: Document) -> MutexGuard<'_, ()> {
        self.locks[document.index()].lock().await
    }

    /// Read a whole document, returning `T::default()` when the file is
    /// absent or empty.
    pub async fn read<T>(&self, document: Document) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(document);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(T::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    document: document.file_name(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            document: document.file_name(),
            source,
        })
    }

    /// Overwrite a whole document.
    pub async fn write<T: Serialize>(
        &self,
        document: Document,
        value: &T,
    ) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
                document: document.file_name(),
                source,
            })?;

        fs::write(self.path(document), content)
            .await
            .map_err(|source| StoreError::Write {
                document: document.file_name(),
                source,
            })?;

        tracing::trace!(document = document.file_name(), "persisted document");
        Ok(())
    }

    /// The data directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
