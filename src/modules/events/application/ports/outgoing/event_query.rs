// src/modules/events/application/ports/outgoing/event_query.rs

use async_trait::async_trait;

use super::event_repository::EventRecord;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// All events ordered by date, soonest first.
    async fn list(&self) -> Result<Vec<EventRecord>, EventQueryError>;

    async fn count_events(&self) -> Result<u64, EventQueryError>;
}
