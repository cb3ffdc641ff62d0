use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::posts::adapter::outgoing::sea_orm_entity::{comments, post_likes, posts};
use crate::modules::posts::application::ports::outgoing::post_repository::{
    CreatePostData, PostRecord, PostRepository, PostRepositoryError, UpdatePostData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn like_count(&self, post_id: Uuid) -> Result<u64, PostRepositoryError> {
        post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn insert(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.author_id),
            title: Set(data.title.trim().to_string()),
            content: Set(data.content),
            image_url: Set(data.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn update(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, PostRepositoryError> {
        let mut model: posts::ActiveModel = Default::default();

        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let Some(content) = data.content {
            model.content = Set(content);
        }

        if let Some(image_url) = data.image_url {
            model.image_url = Set(Some(image_url));
        }

        if !model.is_changed() {
            let result = posts::Entity::find_by_id(post_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(PostRepositoryError::NotFound)?;

            return Ok(model_to_record(result));
        }

        // update_many bypasses ActiveModelBehavior, so stamp updated_at here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = posts::Entity::update_many()
            .set(model)
            .filter(posts::Column::Id.eq(post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(PostRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = posts::Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn owner_of(&self, post_id: Uuid) -> Result<Option<Uuid>, PostRepositoryError> {
        let post = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(post.map(|p| p.user_id))
    }

    async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: String,
    ) -> Result<(), PostRepositoryError> {
        let model = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(post_id),
            user_id: Set(author_id),
            text: Set(text),
            created_at: Set(Utc::now().fixed_offset()),
        };

        model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }

    async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, PostRepositoryError> {
        let existing = post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .filter(post_likes::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match existing {
            Some(like) => {
                post_likes::Entity::delete_by_id(like.id)
                    .exec(&*self.db)
                    .await
                    .map_err(map_db_err)?;
            }
            None => {
                let model = post_likes::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    post_id: Set(post_id),
                    user_id: Set(user_id),
                    created_at: Set(Utc::now().fixed_offset()),
                };
                model.insert(&*self.db).await.map_err(map_db_err)?;
            }
        }

        self.like_count(post_id).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: posts::Model) -> PostRecord {
    PostRecord {
        id: model.id,
        author_id: model.user_id,
        title: model.title,
        content: model.content,
        image_url: model.image_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
