//! Domain Services
//!
//! Stateless domain logic: energy heuristic, prompt rendering, fallback
//! replies and log queries.

mod energy;
mod fallback;
mod improv_prompt;
mod tutor;
mod wellness;

pub use energy::*;
pub use fallback::*;
pub use improv_prompt::*;
pub use tutor::*;
pub use wellness::*;
