//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod checkin_repository;
mod progress_repository;

pub use checkin_repository::*;
pub use progress_repository::*;
