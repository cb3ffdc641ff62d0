// src/modules/donations/application/ports/outgoing/donation_query.rs

use async_trait::async_trait;

use super::donation_repository::DonationRecord;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DonationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DonationQuery: Send + Sync {
    /// All campaigns, newest first.
    async fn list(&self) -> Result<Vec<DonationRecord>, DonationQueryError>;

    async fn count_donations(&self) -> Result<u64, DonationQueryError>;
}
