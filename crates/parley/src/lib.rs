//! Parley Domain Library
//!
//! Core domain types and interfaces for the Parley voice agents: an improv
//! partner, an active recall programming tutor and a wellness companion.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: EnergyReading, PromptRequest, WellnessCheckIn, TutorProgress, Concept
//!   - `value_objects/`: EnergyLevel, TutorMode, AgentKind
//!   - `services/`: energy classifier, improv prompt builder, fallback responder, log queries
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Interaction log persistence
//!   - `services/`: Language model interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use parley::{classify_energy, build_improv_prompt};
//!
//! let energy = classify_energy("We're pirates looking for treasure!");
//! let prompt = build_improv_prompt("We're pirates looking for treasure!", &energy, None);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_improv_prompt, checkins_on, classify_energy, energy_guidance, latest_checkin, mastery,
    progress_for_concept, recent_checkins, tutor_instructions, wellness_context,
    wellness_instructions, AgentKind, Concept, ConceptMastery, DomainError, EnergyLevel,
    EnergyReading, FallbackResponder, LogStamp, PromptRequest, TutorMode, TutorProgress,
    WellnessCheckIn,
};
pub use ports::{
    ChatMessage, CheckInRepository, CompletionOptions, CompletionResponse, LlmProvider,
    MessageRole, ProgressRepository, TokenUsage,
};
