//! Append-only JSON array file
//!
//! The whole file is one pretty-printed JSON array. A missing file is an
//! empty log; a malformed file is logged and treated as empty.

use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use parley::DomainError;

/// JSON array log stored in a single file
pub struct JsonLogStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonLogStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records. I/O failures other than a missing file are errors.
    pub async fn read_all(&self) -> Result<Vec<T>, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    "Log file {} is not a valid record array, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Append one record and rewrite the file. Returns the new record count.
    pub async fn append(&self, record: &T) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all().await?;
        records.push(record.clone());

        self.write_all(&records).await?;
        Ok(records.len())
    }

    async fn write_all(&self, records: &[T]) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                DomainError::Repository(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let body = serde_json::to_string_pretty(records)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize log: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await.map_err(|e| {
            DomainError::Repository(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::Repository(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    fn note(text: &str) -> Note {
        Note {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLogStore::<Note>::new(dir.path().join("notes.json"));
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_writes_pretty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");
        let store = JsonLogStore::<Note>::new(&path);

        assert_eq!(store.append(&note("first")).await.unwrap(), 1);
        assert_eq!(store.append(&note("second")).await.unwrap(), 2);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"text\": \"first\""));
        assert_eq!(
            store.read_all().await.unwrap(),
            vec![note("first"), note("second")]
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonLogStore::<Note>::new(&path);
        assert!(store.read_all().await.unwrap().is_empty());

        store.append(&note("fresh")).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), vec![note("fresh")]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonLogStore::<Note>::new(dir.path().join("notes.json")));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(&note(&format!("n{i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.read_all().await.unwrap().len(), 16);
    }
}
