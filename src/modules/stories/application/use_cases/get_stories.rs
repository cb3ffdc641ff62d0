use async_trait::async_trait;

use crate::modules::stories::application::ports::outgoing::story_query::{
    StoryQuery, StoryQueryError, StoryWithAuthorView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStoriesError {
    #[error("Failed to load stories: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IGetStoriesUseCase {
    async fn execute(&self) -> Result<Vec<StoryWithAuthorView>, GetStoriesError>;
}

pub struct GetStoriesService<Q>
where
    Q: StoryQuery,
{
    story_query: Q,
}

impl<Q> GetStoriesService<Q>
where
    Q: StoryQuery,
{
    pub fn new(story_query: Q) -> Self {
        Self { story_query }
    }
}

#[async_trait]
impl<Q> IGetStoriesUseCase for GetStoriesService<Q>
where
    Q: StoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<StoryWithAuthorView>, GetStoriesError> {
        self.story_query
            .list()
            .await
            .map_err(|StoryQueryError::DatabaseError(msg)| GetStoriesError::QueryFailed(msg))
    }
}
