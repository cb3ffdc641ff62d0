// src/modules/donations/application/ports/outgoing/donation_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateDonationData {
    pub created_by: Uuid,
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub image_url: Option<String>,
    pub qr_code_url: Option<String>,
}

/// A campaign row as stored. New campaigns always start with
/// `current_amount` at zero.
#[derive(Debug, Clone, Serialize)]
pub struct DonationRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub image_url: Option<String>,
    pub qr_code_url: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DonationRepositoryError {
    #[error("Donation not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn insert(&self, data: CreateDonationData)
        -> Result<DonationRecord, DonationRepositoryError>;

    async fn delete(&self, donation_id: Uuid) -> Result<(), DonationRepositoryError>;
}
