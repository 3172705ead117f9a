//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - EnergyReading: heuristic intensity of a user turn
//! - PromptRequest: one improv turn waiting to be rendered
//! - WellnessCheckIn / TutorProgress: persisted interaction log records
//! - Concept: built-in tutor curriculum

mod checkin;
mod concept;
mod energy;
mod log_stamp;
mod progress;
mod prompt;

pub use checkin::*;
pub use concept::*;
pub use energy::*;
pub use log_stamp::*;
pub use progress::*;
pub use prompt::*;
