//! Tutor Application Service (Use Case)

use std::sync::Arc;

use parley::{
    mastery, progress_for_concept, tutor_instructions, Concept, ConceptMastery, DomainError,
    ProgressRepository, TutorMode, TutorProgress,
};

/// Application service for tutor sessions
pub struct TutorService<R: ProgressRepository> {
    repo: Arc<R>,
}

impl<R: ProgressRepository> TutorService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn concepts(&self) -> &'static [Concept] {
        Concept::catalogue()
    }

    /// Look up a concept, NotFound when it is not in the catalogue
    pub fn concept(&self, id: &str) -> Result<&'static Concept, DomainError> {
        Concept::find(id).ok_or_else(|| DomainError::not_found("Concept", id))
    }

    /// Validate and append a progress record
    pub async fn record(
        &self,
        concept_id: &str,
        mode: TutorMode,
        score: Option<u8>,
        feedback: Option<String>,
    ) -> Result<TutorProgress, DomainError> {
        let record = TutorProgress::new(concept_id, mode, score, feedback)?;
        self.repo.append(&record).await?;

        tracing::info!(
            "Recorded tutor progress: {} ({}) score={:?}",
            record.concept_id,
            record.mode,
            record.score
        );

        Ok(record)
    }

    /// All progress records, or only those for one concept
    pub async fn progress(&self, concept_id: Option<&str>) -> Result<Vec<TutorProgress>, DomainError> {
        let records = self.repo.load_all().await?;
        match concept_id {
            Some(id) => {
                let concept = self.concept(id)?;
                Ok(progress_for_concept(&records, concept.id)
                    .into_iter()
                    .cloned()
                    .collect())
            }
            None => Ok(records),
        }
    }

    pub async fn mastery(&self) -> Result<Vec<ConceptMastery>, DomainError> {
        let records = self.repo.load_all().await?;
        Ok(mastery(&records))
    }

    pub fn instructions(&self, mode: TutorMode, concept_id: &str) -> Result<String, DomainError> {
        Ok(tutor_instructions(mode, self.concept(concept_id)?))
    }
}
