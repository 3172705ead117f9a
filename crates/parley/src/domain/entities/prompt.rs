//! PromptRequest - One conversational turn waiting to be rendered
//!
//! Ephemeral: built per turn, consumed by the prompt builder, dropped.

use crate::domain::entities::EnergyReading;
use crate::domain::services::{build_improv_prompt, classify_energy};

/// Inputs of the improv prompt builder
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub transcript: String,
    pub energy: EnergyReading,
    pub persona: Option<String>,
}

impl PromptRequest {
    /// Create a request, classifying the transcript's energy
    pub fn new(transcript: impl Into<String>, persona: Option<String>) -> Self {
        let transcript = transcript.into();
        let energy = classify_energy(&transcript);
        Self {
            transcript,
            energy,
            persona,
        }
    }

    /// Create a request with an energy reading computed elsewhere
    pub fn with_energy(
        transcript: impl Into<String>,
        energy: EnergyReading,
        persona: Option<String>,
    ) -> Self {
        Self {
            transcript: transcript.into(),
            energy,
            persona,
        }
    }

    /// Render the instruction text for the language model
    pub fn render(&self) -> String {
        build_improv_prompt(&self.transcript, &self.energy, self.persona.as_deref())
    }
}
