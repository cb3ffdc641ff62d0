use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::events::adapter::outgoing::sea_orm_entity::events;
use crate::modules::events::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};
use crate::modules::events::application::ports::outgoing::event_repository::EventRecord;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list(&self) -> Result<Vec<EventRecord>, EventQueryError> {
        let models = events::Entity::find()
            .order_by_asc(events::Column::EventDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn count_events(&self) -> Result<u64, EventQueryError> {
        events::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: events::Model) -> EventRecord {
    EventRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        event_date: model.event_date.into(),
        location: model.location,
        max_participants: model.max_participants,
        image_url: model.image_url,
        application_link: model.application_link,
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EventQueryError {
    EventQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
