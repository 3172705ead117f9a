//! Progress Repository Port
//!
//! Append-only persistence for tutor progress records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, TutorProgress};

/// Repository interface for tutor progress
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Append a progress record to the log
    async fn append(&self, record: &TutorProgress) -> Result<(), DomainError>;

    /// Load every record, oldest first
    async fn load_all(&self) -> Result<Vec<TutorProgress>, DomainError>;
}
