use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::posts::application::ports::outgoing::post_query::{
    CommentView, PostQuery, PostQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetCommentsUseCase {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, GetCommentsError>;
}

pub struct GetCommentsService<Q>
where
    Q: PostQuery,
{
    post_query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: PostQuery,
{
    pub fn new(post_query: Q) -> Self {
        Self { post_query }
    }
}

#[async_trait]
impl<Q> IGetCommentsUseCase for GetCommentsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, GetCommentsError> {
        self.post_query
            .list_comments(post_id)
            .await
            .map_err(|e| match e {
                PostQueryError::NotFound => GetCommentsError::PostNotFound,
                PostQueryError::DatabaseError(msg) => GetCommentsError::QueryFailed(msg),
            })
    }
}
