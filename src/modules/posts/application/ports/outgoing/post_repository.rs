// src/modules/posts/application/ports/outgoing/post_repository.rs

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
pub struct CreatePostData {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Partial update. `None` keeps the stored value; there is no way to clear
/// a field through this struct, matching the feed's edit form.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// A post row as written, without the author join or counters. Create and
/// update respond with this shape; reads go through `PostQuery` views.
#[derive(Debug, Clone, Serialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side: posts, comments and likes tables)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError>;

    /// Applies the provided fields to an existing post. The ownership check
    /// happens in the use case via `owner_of`, not here.
    async fn update(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, PostRepositoryError>;

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;

    /// Author id of the post, or `None` when the post does not exist. Doubles
    /// as the existence probe for comment and like writes.
    async fn owner_of(&self, post_id: Uuid) -> Result<Option<Uuid>, PostRepositoryError>;

    async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: String,
    ) -> Result<(), PostRepositoryError>;

    /// Removes the caller's like when present, records it otherwise, and
    /// returns the like count after the flip.
    async fn toggle_like(&self, post_id: Uuid, user_id: Uuid)
        -> Result<u64, PostRepositoryError>;
}
