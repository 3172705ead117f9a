//! JSON file implementation of ProgressRepository

use async_trait::async_trait;
use std::path::PathBuf;

use parley::{DomainError, ProgressRepository, TutorProgress};

use super::JsonLogStore;

/// Tutor progress stored in `tutor_progress.json`
pub struct JsonProgressRepository {
    store: JsonLogStore<TutorProgress>,
}

impl JsonProgressRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonLogStore::new(path),
        }
    }
}

#[async_trait]
impl ProgressRepository for JsonProgressRepository {
    async fn append(&self, record: &TutorProgress) -> Result<(), DomainError> {
        self.store.append(record).await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<TutorProgress>, DomainError> {
        self.store.read_all().await
    }
}
