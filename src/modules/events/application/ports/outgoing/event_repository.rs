// src/modules/events/application/ports/outgoing/event_repository.rs

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
pub struct CreateEventData {
    pub created_by: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub image_url: Option<String>,
    pub application_link: Option<String>,
}

/// An event row as stored. `created_by` is `None` once the creating admin's
/// account has been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub image_url: Option<String>,
    pub application_link: Option<String>,
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
pub enum EventRepositoryError {
    #[error("Event not found")]
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
pub trait EventRepository: Send + Sync {
    async fn insert(&self, data: CreateEventData) -> Result<EventRecord, EventRepositoryError>;

    async fn delete(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;
}
