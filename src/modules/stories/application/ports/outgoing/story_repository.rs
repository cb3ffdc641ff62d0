// src/modules/stories/application/ports/outgoing/story_repository.rs

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
pub struct CreateStoryData {
    pub author: Uuid,
    pub title: String,
    pub story: String,
    pub achievement: Option<String>,
    pub image_url: Option<String>,
}

/// A story row as stored. The listing joins the author via `StoryQuery`;
/// this record carries the bare id.
#[derive(Debug, Clone, Serialize)]
pub struct StoryRecord {
    pub id: Uuid,
    pub title: String,
    pub story: String,
    pub achievement: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoryRepositoryError {
    #[error("Story not found")]
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
pub trait StoryRepository: Send + Sync {
    async fn insert(&self, data: CreateStoryData) -> Result<StoryRecord, StoryRepositoryError>;

    async fn delete(&self, story_id: Uuid) -> Result<(), StoryRepositoryError>;
}
