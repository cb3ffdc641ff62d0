use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::stories::adapter::outgoing::sea_orm_entity::stories;
use crate::modules::stories::application::ports::outgoing::story_query::{
    StoryAuthorView, StoryQuery, StoryQueryError, StoryWithAuthorView,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct StoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoryQuery for StoryQueryPostgres {
    async fn list(&self) -> Result<Vec<StoryWithAuthorView>, StoryQueryError> {
        let rows = stories::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(stories::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(build_story_view).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_story_view((story, author): (stories::Model, Option<users::Model>)) -> StoryWithAuthorView {
    StoryWithAuthorView {
        id: story.id,
        title: story.title,
        story: story.story,
        achievement: story.achievement,
        image_url: story.image_url,
        author: author.map(|u| StoryAuthorView {
            id: u.id,
            name: u.name,
            email: u.email,
        }),
        created_at: story.created_at.into(),
        updated_at: story.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> StoryQueryError {
    StoryQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
