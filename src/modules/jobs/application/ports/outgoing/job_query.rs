// src/modules/jobs/application/ports/outgoing/job_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::job_repository::JobRecord;

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct JobPosterView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Review-queue read model: the row plus who posted it, so an admin can
/// judge a posting without a second lookup.
#[derive(Debug, Clone, Serialize)]
pub struct JobWithPosterView {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_link: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub is_verified: bool,
    pub created_by: JobPosterView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait JobQuery: Send + Sync {
    /// Verified postings only, newest first. This is the public board.
    async fn list_verified(&self) -> Result<Vec<JobRecord>, JobQueryError>;

    /// Every posting with its poster, newest first, for the review queue.
    async fn list_all(&self) -> Result<Vec<JobWithPosterView>, JobQueryError>;

    async fn count_jobs(&self) -> Result<u64, JobQueryError>;

    async fn count_verified(&self) -> Result<u64, JobQueryError>;
}
