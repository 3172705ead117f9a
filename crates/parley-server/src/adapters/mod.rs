//! Adapters Layer
//!
//! Concrete implementations of the ports defined in the parley crate.

mod gemini;
pub mod json_file;

pub use gemini::GeminiProvider;
pub use json_file::{JsonCheckInRepository, JsonProgressRepository};
