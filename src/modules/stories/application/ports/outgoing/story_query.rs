// src/modules/stories/application/ports/outgoing/story_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct StoryAuthorView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Listing read model. `author` is `None` for stories whose author account
/// no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct StoryWithAuthorView {
    pub id: Uuid,
    pub title: String,
    pub story: String,
    pub achievement: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<StoryAuthorView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait StoryQuery: Send + Sync {
    /// All stories with their author, newest first.
    async fn list(&self) -> Result<Vec<StoryWithAuthorView>, StoryQueryError>;
}
