// src/modules/profiles/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Avatar served for accounts that never uploaded a photo.
pub const DEFAULT_PHOTO: &str =
    "https://res.cloudinary.com/dddqt6qjf/image/upload/v1765099637/9815472_tkoi09.png";

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Field-by-field patch. `None` leaves the stored value untouched; on the
/// first write for a user the untouched fields simply start out NULL, with
/// `photo` falling back to [`DEFAULT_PHOTO`].
#[derive(Debug, Clone, Default)]
pub struct UpsertProfileData {
    pub bio: Option<String>,
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub current_position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    #[serde(rename = "currentPosition")]
    pub current_position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub photo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Creates the row on first write, patches it afterwards.
    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;
}
