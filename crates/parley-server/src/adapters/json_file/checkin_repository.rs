//! JSON file implementation of CheckInRepository

use async_trait::async_trait;
use std::path::PathBuf;

use parley::{CheckInRepository, DomainError, WellnessCheckIn};

use super::JsonLogStore;

/// Wellness check-ins stored in `wellness_log.json`
pub struct JsonCheckInRepository {
    store: JsonLogStore<WellnessCheckIn>,
}

impl JsonCheckInRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonLogStore::new(path),
        }
    }
}

#[async_trait]
impl CheckInRepository for JsonCheckInRepository {
    async fn append(&self, entry: &WellnessCheckIn) -> Result<(), DomainError> {
        let total = self.store.append(entry).await?;
        tracing::debug!(
            "Appended check-in to {} ({} total)",
            self.store.path().display(),
            total
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<WellnessCheckIn>, DomainError> {
        self.store.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_log_written_by_earlier_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wellness_log.json");
        std::fs::write(
            &path,
            r#"[
  {
    "timestamp": "2025-11-23T10:15:02.512345",
    "date": "2025-11-23",
    "time": "10:15:02",
    "mood": "energetic",
    "energy_level": "high",
    "objectives": "Complete Day 3 challenge, record demo video, post on LinkedIn",
    "stress_factors": "Excited about the challenge deadline!",
    "summary": "Mood: energetic, Energy: high. Goals: Complete Day 3 challenge, record demo video, post on LinkedIn"
  }
]"#,
        )
        .unwrap();

        let repo = JsonCheckInRepository::new(&path);
        let entries = repo.load_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, "energetic");
        assert_eq!(entries[0].stamp.time, "10:15:02");
        assert_eq!(
            entries[0].stress_factors.as_deref(),
            Some("Excited about the challenge deadline!")
        );

        let next = WellnessCheckIn::new(
            "calm".to_string(),
            "medium".to_string(),
            "review notes".to_string(),
            None,
        )
        .unwrap();
        repo.append(&next).await.unwrap();

        let entries = repo.load_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], next);
    }
}
