//! TutorMode - Active recall learning modes

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Learning mode of the tutor agent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TutorMode {
    /// Tutor explains the concept
    #[default]
    Learn,
    /// Tutor asks questions about the concept
    Quiz,
    /// Learner explains the concept back and gets feedback
    TeachBack,
}

impl TutorMode {
    pub const ALL: [TutorMode; 3] = [TutorMode::Learn, TutorMode::Quiz, TutorMode::TeachBack];

    /// Turn guidance for the tutor in this mode
    pub fn guidance(&self) -> &'static str {
        match self {
            TutorMode::Learn => {
                "Explain the concept clearly in small steps. Use one short, concrete code example \
                 and check understanding before moving on."
            }
            TutorMode::Quiz => {
                "Ask one question at a time about the concept. Wait for the answer, say whether \
                 it is right, and give a one-line explanation."
            }
            TutorMode::TeachBack => {
                "Ask the learner to explain the concept in their own words. Listen, then give \
                 warm, specific feedback: what was correct, what was missing, and a score out of 10."
            }
        }
    }
}

impl std::fmt::Display for TutorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorMode::Learn => write!(f, "learn"),
            TutorMode::Quiz => write!(f, "quiz"),
            TutorMode::TeachBack => write!(f, "teach_back"),
        }
    }
}

impl std::str::FromStr for TutorMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "learn" => Ok(TutorMode::Learn),
            "quiz" => Ok(TutorMode::Quiz),
            "teach_back" | "teachback" => Ok(TutorMode::TeachBack),
            _ => Err(DomainError::validation(format!(
                "Unknown tutor mode: {}. Valid: learn, quiz, teach_back",
                s
            ))),
        }
    }
}
