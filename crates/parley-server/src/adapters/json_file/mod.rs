//! JSON File Repository Implementations

mod checkin_repository;
mod progress_repository;
mod store;

pub use checkin_repository::JsonCheckInRepository;
pub use progress_repository::JsonProgressRepository;
use store::JsonLogStore;
