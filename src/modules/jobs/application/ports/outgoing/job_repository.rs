// src/modules/jobs/application/ports/outgoing/job_repository.rs

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
pub struct CreateJobData {
    pub created_by: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_link: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    /// Decided by the policy module before the insert: admin postings are
    /// born verified, alumni postings wait for review.
    pub is_verified: bool,
}

/// A job row as stored. The public listing serializes this directly; the
/// admin listing joins the poster via `JobQuery`.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_link: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub is_verified: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job not found")]
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
pub trait JobRepository: Send + Sync {
    async fn insert(&self, data: CreateJobData) -> Result<JobRecord, JobRepositoryError>;

    /// Marks a posting as reviewed. Already-verified rows pass through
    /// unchanged; a missing row is `NotFound`.
    async fn set_verified(&self, job_id: Uuid) -> Result<JobRecord, JobRepositoryError>;

    async fn delete(&self, job_id: Uuid) -> Result<(), JobRepositoryError>;
}
