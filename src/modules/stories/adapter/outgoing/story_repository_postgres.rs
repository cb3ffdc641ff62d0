use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::stories::adapter::outgoing::sea_orm_entity::stories;
use crate::modules::stories::application::ports::outgoing::story_repository::{
    CreateStoryData, StoryRecord, StoryRepository, StoryRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct StoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoryRepository for StoryRepositoryPostgres {
    async fn insert(&self, data: CreateStoryData) -> Result<StoryRecord, StoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = stories::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            story: Set(data.story.trim().to_string()),
            achievement: Set(data.achievement),
            image_url: Set(data.image_url),
            author: Set(Some(data.author)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn delete(&self, story_id: Uuid) -> Result<(), StoryRepositoryError> {
        let result = stories::Entity::delete_by_id(story_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StoryRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: stories::Model) -> StoryRecord {
    StoryRecord {
        id: model.id,
        title: model.title,
        story: model.story,
        achievement: model.achievement,
        image_url: model.image_url,
        author: model.author,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> StoryRepositoryError {
    StoryRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
