use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::events::adapter::outgoing::sea_orm_entity::events;
use crate::modules::events::application::ports::outgoing::event_repository::{
    CreateEventData, EventRecord, EventRepository, EventRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn insert(&self, data: CreateEventData) -> Result<EventRecord, EventRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = events::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            event_date: Set(data.event_date.fixed_offset()),
            location: Set(data.location.trim().to_string()),
            max_participants: Set(data.max_participants),
            image_url: Set(data.image_url),
            application_link: Set(data.application_link),
            created_by: Set(Some(data.created_by)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn delete(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        let result = events::Entity::delete_by_id(event_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFound);
        }

        Ok(())
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

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
