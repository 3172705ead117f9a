//! Wellness Application Service (Use Case)

use std::sync::Arc;

use parley::{
    checkins_on, latest_checkin, recent_checkins, wellness_context, wellness_instructions,
    CheckInRepository, DomainError, WellnessCheckIn,
};

/// Application service for wellness check-ins
pub struct WellnessService<R: CheckInRepository> {
    repo: Arc<R>,
}

impl<R: CheckInRepository> WellnessService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and append a check-in
    pub async fn record(
        &self,
        mood: String,
        energy_level: String,
        objectives: String,
        stress_factors: Option<String>,
    ) -> Result<WellnessCheckIn, DomainError> {
        let entry = WellnessCheckIn::new(mood, energy_level, objectives, stress_factors)?;
        self.repo.append(&entry).await?;

        tracing::info!("Recorded check-in: {}", entry.summary);

        Ok(entry)
    }

    /// Every check-in, oldest first
    pub async fn history(&self) -> Result<Vec<WellnessCheckIn>, DomainError> {
        self.repo.load_all().await
    }

    /// The last `limit` check-ins, or all of them
    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<WellnessCheckIn>, DomainError> {
        let history = self.history().await?;
        Ok(match limit {
            Some(n) => recent_checkins(&history, n).to_vec(),
            None => history,
        })
    }

    pub async fn latest(&self) -> Result<Option<WellnessCheckIn>, DomainError> {
        let history = self.history().await?;
        Ok(latest_checkin(&history).cloned())
    }

    pub async fn on_date(&self, date: &str) -> Result<Vec<WellnessCheckIn>, DomainError> {
        let history = self.history().await?;
        Ok(checkins_on(&history, date).into_iter().cloned().collect())
    }

    /// Reminder of the previous check-in
    pub async fn context(&self) -> Result<String, DomainError> {
        let history = self.history().await?;
        Ok(wellness_context(latest_checkin(&history)))
    }

    /// Full instructions for the wellness companion
    pub async fn instructions(&self) -> Result<String, DomainError> {
        let history = self.history().await?;
        Ok(wellness_instructions(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonCheckInRepository;

    fn service(dir: &tempfile::TempDir) -> WellnessService<JsonCheckInRepository> {
        let repo = JsonCheckInRepository::new(dir.path().join("wellness_log.json"));
        WellnessService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_record_then_query() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        assert!(service.latest().await.unwrap().is_none());
        assert!(service.context().await.unwrap().contains("first check-in"));

        for mood in ["tired", "okay", "great"] {
            service
                .record(
                    mood.to_string(),
                    "medium".to_string(),
                    "finish slides".to_string(),
                    None,
                )
                .await
                .unwrap();
        }

        let recent = service.recent(Some(2)).await.unwrap();
        let moods: Vec<&str> = recent.iter().map(|e| e.mood.as_str()).collect();
        assert_eq!(moods, vec!["okay", "great"]);
        assert_eq!(service.recent(None).await.unwrap().len(), 3);
        assert_eq!(service.latest().await.unwrap().unwrap().mood, "great");

        let today = service.latest().await.unwrap().unwrap().stamp.date;
        assert_eq!(service.on_date(&today).await.unwrap().len(), 3);
        assert!(service.on_date("1999-01-01").await.unwrap().is_empty());

        assert!(service.context().await.unwrap().contains("they felt great"));
    }

    #[tokio::test]
    async fn test_record_rejects_blank_fields() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let err = service
            .record(" ".to_string(), "low".to_string(), "rest".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.history().await.unwrap().is_empty());
    }
}
