use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::posts::adapter::outgoing::sea_orm_entity::{comments, post_likes, posts};
use crate::modules::posts::application::ports::outgoing::post_query::{
    AuthorView, CommentAuthorView, CommentView, PostQuery, PostQueryError, PostView,
};

// ============================================================================
// Query Implementation
// ============================================================================

/// Read side of the feed. Counts come from two grouped queries merged in
/// memory rather than a four-way join, which keeps each statement trivial
/// for the database to plan.
#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

#[derive(FromQueryResult)]
struct CountRow {
    post_id: Uuid,
    count: i64,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn comment_counts(&self) -> Result<HashMap<Uuid, u64>, PostQueryError> {
        let rows = comments::Entity::find()
            .select_only()
            .column(comments::Column::PostId)
            .column_as(comments::Column::Id.count(), "count")
            .group_by(comments::Column::PostId)
            .into_model::<CountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|r| (r.post_id, r.count as u64)).collect())
    }

    async fn like_counts(&self) -> Result<HashMap<Uuid, u64>, PostQueryError> {
        let rows = post_likes::Entity::find()
            .select_only()
            .column(post_likes::Column::PostId)
            .column_as(post_likes::Column::Id.count(), "count")
            .group_by(post_likes::Column::PostId)
            .into_model::<CountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|r| (r.post_id, r.count as u64)).collect())
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_posts(&self) -> Result<Vec<PostView>, PostQueryError> {
        let rows = posts::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(posts::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let comment_counts = self.comment_counts().await?;
        let like_counts = self.like_counts().await?;

        rows.into_iter()
            .map(|(post, author)| {
                let author = require_author(author, post.id)?;
                let comment_count = comment_counts.get(&post.id).copied().unwrap_or(0);
                let like_count = like_counts.get(&post.id).copied().unwrap_or(0);
                Ok(build_post_view(post, author, comment_count, like_count))
            })
            .collect()
    }

    async fn get_post(&self, post_id: Uuid) -> Result<PostView, PostQueryError> {
        let (post, author) = posts::Entity::find_by_id(post_id)
            .find_also_related(users::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostQueryError::NotFound)?;

        let author = require_author(author, post.id)?;

        let comment_count = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let like_count = post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(build_post_view(post, author, comment_count, like_count))
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<CommentView>, PostQueryError> {
        let post = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if post.is_none() {
            return Err(PostQueryError::NotFound);
        }

        let rows = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .find_also_related(users::Entity)
            .order_by_asc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    PostQueryError::DatabaseError(format!(
                        "comment {} has no author row",
                        comment.id
                    ))
                })?;

                Ok(CommentView {
                    id: comment.id,
                    author: CommentAuthorView {
                        id: author.id,
                        name: author.name,
                        email: author.email,
                    },
                    text: comment.text,
                    created_at: comment.created_at.into(),
                })
            })
            .collect()
    }

    async fn count_posts(&self) -> Result<u64, PostQueryError> {
        posts::Entity::find().count(&*self.db).await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn require_author(author: Option<users::Model>, post_id: Uuid) -> Result<users::Model, PostQueryError> {
    author.ok_or_else(|| {
        PostQueryError::DatabaseError(format!("post {} has no author row", post_id))
    })
}

fn build_post_view(
    post: posts::Model,
    author: users::Model,
    comment_count: u64,
    like_count: u64,
) -> PostView {
    PostView {
        id: post.id,
        author: AuthorView {
            id: author.id,
            name: author.name,
            email: author.email,
            role: author.role,
        },
        title: post.title,
        content: post.content,
        image_url: post.image_url,
        like_count,
        comment_count,
        created_at: post.created_at.into(),
        updated_at: post.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
