//! Tutor progress payloads

use serde::{Deserialize, Serialize};

use parley::{DomainError, TutorMode};

#[derive(Debug, Deserialize)]
pub struct RecordProgressRequest {
    pub concept_id: String,
    pub mode: Option<String>,
    pub score: Option<i64>,
    pub feedback: Option<String>,
}

impl RecordProgressRequest {
    /// Mode name, defaulting to `learn`
    pub fn mode(&self) -> Result<TutorMode, DomainError> {
        parse_mode(self.mode.as_deref())
    }

    /// Score narrowed to the stored width. Range is checked by the entity.
    pub fn score(&self) -> Result<Option<u8>, DomainError> {
        self.score
            .map(|s| {
                u8::try_from(s).map_err(|_| {
                    DomainError::validation(format!("Score must be between 0 and 10, got {}", s))
                })
            })
            .transpose()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub concept: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InstructionsQuery {
    pub mode: Option<String>,
    pub concept: String,
}

impl InstructionsQuery {
    pub fn mode(&self) -> Result<TutorMode, DomainError> {
        parse_mode(self.mode.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct InstructionsResponse {
    pub mode: TutorMode,
    pub concept_id: String,
    pub instructions: String,
}

fn parse_mode(mode: Option<&str>) -> Result<TutorMode, DomainError> {
    match mode.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => m.parse(),
        None => Ok(TutorMode::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: Option<&str>, score: Option<i64>) -> RecordProgressRequest {
        RecordProgressRequest {
            concept_id: "loops".to_string(),
            mode: mode.map(str::to_string),
            score,
            feedback: None,
        }
    }

    #[test]
    fn test_mode_defaults_to_learn() {
        assert_eq!(request(None, None).mode().unwrap(), TutorMode::Learn);
        assert_eq!(request(Some(""), None).mode().unwrap(), TutorMode::Learn);
        assert_eq!(
            request(Some("teach-back"), None).mode().unwrap(),
            TutorMode::TeachBack
        );
        assert!(request(Some("lecture"), None).mode().is_err());
    }

    #[test]
    fn test_score_out_of_width() {
        assert_eq!(request(None, Some(7)).score().unwrap(), Some(7));
        assert!(request(None, Some(-1)).score().is_err());
        assert!(request(None, Some(300)).score().is_err());
    }
}
