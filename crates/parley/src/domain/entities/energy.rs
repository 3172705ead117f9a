//! EnergyReading - Heuristic intensity signal for one user turn
//!
//! Constructed fresh per transcript and never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::EnergyLevel;

/// Energy level plus the composite score it was derived from.
///
/// Readings built through [`EnergyReading::new`] or deserialization are
/// checked: the score lies in `[0.0, 1.0]` and the level matches the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnergyReading")]
pub struct EnergyReading {
    level: EnergyLevel,
    score: f64,
}

#[derive(Deserialize)]
struct RawEnergyReading {
    level: EnergyLevel,
    score: f64,
}

impl TryFrom<RawEnergyReading> for EnergyReading {
    type Error = DomainError;

    fn try_from(raw: RawEnergyReading) -> Result<Self, Self::Error> {
        EnergyReading::new(raw.level, raw.score)
    }
}

impl EnergyReading {
    /// Reading used when there is no transcript at all
    pub const NEUTRAL: EnergyReading = EnergyReading {
        level: EnergyLevel::Medium,
        score: 0.5,
    };

    /// Validate an externally supplied reading
    pub fn new(level: EnergyLevel, score: f64) -> Result<Self, DomainError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(DomainError::validation(format!(
                "Energy score must be within 0.0..=1.0, got {}",
                score
            )));
        }
        let implied = EnergyLevel::from_score(score);
        if implied != level {
            return Err(DomainError::validation(format!(
                "Energy level {} does not match score {} (implies {})",
                level, score, implied
            )));
        }
        Ok(Self { level, score })
    }

    /// Reading for a composite score, clamped into `[0.0, 1.0]`
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        Self {
            level: EnergyLevel::from_score(score),
            score,
        }
    }

    pub fn level(&self) -> EnergyLevel {
        self.level
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
