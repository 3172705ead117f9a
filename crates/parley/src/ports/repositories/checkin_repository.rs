//! Check-in Repository Port
//!
//! Append-only persistence for wellness check-ins.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, WellnessCheckIn};

/// Repository interface for wellness check-ins
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Append a check-in to the log
    async fn append(&self, entry: &WellnessCheckIn) -> Result<(), DomainError>;

    /// Load every check-in, oldest first
    async fn load_all(&self) -> Result<Vec<WellnessCheckIn>, DomainError>;
}
