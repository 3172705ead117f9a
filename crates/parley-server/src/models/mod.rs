//! Parley API Data Models
//!
//! - Agents: standing instructions and greetings
//! - Improv: energy, prompt, fallback and respond payloads
//! - Wellness: check-in log payloads
//! - Tutor: progress log payloads

mod agents;
mod improv;
mod tutor;
mod wellness;

pub use agents::*;
pub use improv::*;
pub use tutor::*;
pub use wellness::*;
