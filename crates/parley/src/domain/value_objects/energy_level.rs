//! EnergyLevel - Coarse emotional intensity of a user turn

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Energy level classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Score above which a reading is `High`
    pub const HIGH_THRESHOLD: f64 = 0.6;
    /// Score below which a reading is `Low`
    pub const LOW_THRESHOLD: f64 = 0.3;

    /// Level implied by a composite score. Both thresholds are `Medium`.
    pub fn from_score(score: f64) -> Self {
        if score > Self::HIGH_THRESHOLD {
            EnergyLevel::High
        } else if score < Self::LOW_THRESHOLD {
            EnergyLevel::Low
        } else {
            EnergyLevel::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EnergyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            _ => Err(DomainError::validation(format!(
                "Unknown energy level: {}. Valid: low, medium, high",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_medium() {
        assert_eq!(EnergyLevel::from_score(0.3), EnergyLevel::Medium);
        assert_eq!(EnergyLevel::from_score(0.6), EnergyLevel::Medium);
        assert_eq!(EnergyLevel::from_score(0.29), EnergyLevel::Low);
        assert_eq!(EnergyLevel::from_score(0.61), EnergyLevel::High);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = "extreme".parse::<EnergyLevel>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!("HIGH".parse::<EnergyLevel>().unwrap(), EnergyLevel::High);
    }

    #[test]
    fn test_unknown_level_fails_deserialization() {
        let parsed: Result<EnergyLevel, _> = serde_json::from_str("\"frantic\"");
        assert!(parsed.is_err());
    }
}
