//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod improv_service;
mod tutor_service;
mod wellness_service;

pub use improv_service::{ImprovReply, ImprovService, ReplySource};
pub use tutor_service::TutorService;
pub use wellness_service::WellnessService;
