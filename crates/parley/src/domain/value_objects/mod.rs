//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod agent_kind;
mod energy_level;
mod tutor_mode;

pub use agent_kind::*;
pub use energy_level::*;
pub use tutor_mode::*;
