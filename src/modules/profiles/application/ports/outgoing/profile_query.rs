// src/modules/profiles/application/ports/outgoing/profile_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::profile_repository::ProfileRecord;

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// Owner fields projected into the public profile listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileWithUserView {
    pub id: Uuid,
    pub user: ProfileUserView,
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
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// The caller's own row, if they have written one yet.
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileRecord>, ProfileQueryError>;

    /// All profiles joined to their owner, newest first.
    async fn list_with_user(&self) -> Result<Vec<ProfileWithUserView>, ProfileQueryError>;

    /// Bare rows for a set of users, for callers that join on their side.
    async fn list_by_user_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<ProfileRecord>, ProfileQueryError>;
}
