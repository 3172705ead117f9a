//! WellnessCheckIn - One daily check-in with the wellness companion

use serde::{Deserialize, Serialize};

use crate::domain::entities::LogStamp;
use crate::domain::errors::DomainError;

/// A persisted wellness check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessCheckIn {
    #[serde(flatten)]
    pub stamp: LogStamp,
    pub mood: String,
    pub energy_level: String,
    pub objectives: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_factors: Option<String>,
    pub summary: String,
}

impl WellnessCheckIn {
    /// Create a check-in stamped with the current local time
    pub fn new(
        mood: String,
        energy_level: String,
        objectives: String,
        stress_factors: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::new_at(LogStamp::now(), mood, energy_level, objectives, stress_factors)
    }

    pub fn new_at(
        stamp: LogStamp,
        mood: String,
        energy_level: String,
        objectives: String,
        stress_factors: Option<String>,
    ) -> Result<Self, DomainError> {
        let mood = required("mood", mood)?;
        let energy_level = required("energy_level", energy_level)?;
        let objectives = required("objectives", objectives)?;
        let stress_factors = stress_factors
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let summary = format!(
            "Mood: {}, Energy: {}. Goals: {}",
            mood, energy_level, objectives
        );

        Ok(Self {
            stamp,
            mood,
            energy_level,
            objectives,
            stress_factors,
            summary,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}
