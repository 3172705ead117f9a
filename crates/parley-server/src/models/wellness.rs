//! Wellness check-in payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCheckInRequest {
    pub mood: String,
    pub energy_level: String,
    pub objectives: String,
    pub stress_factors: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckInQuery {
    pub limit: Option<usize>,
    /// `%Y-%m-%d`
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WellnessContextResponse {
    pub context: String,
    pub instructions: String,
}
