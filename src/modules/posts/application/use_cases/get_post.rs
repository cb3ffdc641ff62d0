use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::posts::application::ports::outgoing::post_query::{
    PostQuery, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetPostUseCase {
    async fn execute(&self, post_id: Uuid) -> Result<PostView, GetPostError>;
}

pub struct GetPostService<Q>
where
    Q: PostQuery,
{
    post_query: Q,
}

impl<Q> GetPostService<Q>
where
    Q: PostQuery,
{
    pub fn new(post_query: Q) -> Self {
        Self { post_query }
    }
}

#[async_trait]
impl<Q> IGetPostUseCase for GetPostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<PostView, GetPostError> {
        self.post_query.get_post(post_id).await.map_err(|e| match e {
            PostQueryError::NotFound => GetPostError::NotFound,
            PostQueryError::DatabaseError(msg) => GetPostError::QueryFailed(msg),
        })
    }
}
