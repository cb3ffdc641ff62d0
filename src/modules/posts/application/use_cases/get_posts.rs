use async_trait::async_trait;

use crate::modules::posts::application::ports::outgoing::post_query::{
    PostQuery, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Public feed listing, newest first.
#[async_trait]
pub trait IGetPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostView>, GetPostsError>;
}

pub struct GetPostsService<Q>
where
    Q: PostQuery,
{
    post_query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(post_query: Q) -> Self {
        Self { post_query }
    }
}

#[async_trait]
impl<Q> IGetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PostView>, GetPostsError> {
        self.post_query.list_posts().await.map_err(|e| match e {
            PostQueryError::DatabaseError(msg) => GetPostsError::QueryFailed(msg),
            PostQueryError::NotFound => {
                GetPostsError::QueryFailed("unexpected not found while listing posts".to_string())
            }
        })
    }
}
