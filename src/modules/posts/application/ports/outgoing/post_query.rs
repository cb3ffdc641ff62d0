// src/modules/posts/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Feed read model: the post row joined with its author plus the comment
/// and like counters. Serialized with the author under `user`, which is the
/// key the feed clients already consume.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub author: AuthorView,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub like_count: u64,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentAuthorView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub author: CommentAuthorView,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Whole feed, newest first.
    async fn list_posts(&self) -> Result<Vec<PostView>, PostQueryError>;

    async fn get_post(&self, post_id: Uuid) -> Result<PostView, PostQueryError>;

    /// Comments oldest first. Fails with `NotFound` when the post itself is
    /// gone so the route can 404 instead of returning an empty list.
    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<CommentView>, PostQueryError>;

    async fn count_posts(&self) -> Result<u64, PostQueryError>;
}
