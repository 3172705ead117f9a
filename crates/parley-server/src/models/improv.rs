//! Improv turn payloads

use serde::{Deserialize, Serialize};

use parley::{DomainError, EnergyLevel, EnergyReading};

#[derive(Debug, Deserialize)]
pub struct EnergyRequest {
    pub text: String,
}

/// Energy reading as sent by clients.
///
/// The level stays a plain string so an unknown value surfaces as a
/// validation error instead of a body rejection.
#[derive(Debug, Deserialize)]
pub struct EnergyInput {
    pub level: String,
    pub score: f64,
}

impl EnergyInput {
    pub fn into_reading(self) -> Result<EnergyReading, DomainError> {
        let level: EnergyLevel = self.level.parse()?;
        EnergyReading::new(level, self.score)
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptBody {
    #[serde(default)]
    pub transcript: String,
    pub persona: Option<String>,
    /// Pre-computed reading; classified from the transcript when absent
    pub energy: Option<EnergyInput>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub energy: EnergyReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FallbackRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FallbackResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    #[serde(default)]
    pub transcript: String,
    pub persona: Option<String>,
}
