//! TutorProgress - One recorded tutor interaction

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Concept, LogStamp};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::TutorMode;

/// Highest score a teach-back or quiz can earn
pub const MAX_SCORE: u8 = 10;

/// A persisted tutor progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProgress {
    #[serde(flatten)]
    pub stamp: LogStamp,
    pub concept_id: String,
    pub mode: TutorMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl TutorProgress {
    /// Create a record stamped with the current local time
    pub fn new(
        concept_id: &str,
        mode: TutorMode,
        score: Option<u8>,
        feedback: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::new_at(LogStamp::now(), concept_id, mode, score, feedback)
    }

    pub fn new_at(
        stamp: LogStamp,
        concept_id: &str,
        mode: TutorMode,
        score: Option<u8>,
        feedback: Option<String>,
    ) -> Result<Self, DomainError> {
        let concept = Concept::find(concept_id)
            .ok_or_else(|| DomainError::validation(format!("Unknown concept: {}", concept_id)))?;

        if let Some(score) = score {
            if score > MAX_SCORE {
                return Err(DomainError::validation(format!(
                    "Score must be between 0 and {}, got {}",
                    MAX_SCORE, score
                )));
            }
        }

        Ok(Self {
            stamp,
            concept_id: concept.id.to_string(),
            mode,
            score,
            feedback: feedback
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        })
    }
}
