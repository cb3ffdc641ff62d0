use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::{self, Action};
use crate::modules::stories::application::ports::outgoing::story_repository::{
    CreateStoryData, StoryRecord, StoryRepository, StoryRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateStoryInput {
    pub title: String,
    pub story: String,
    pub achievement: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateStoryError {
    #[error("Only admins may publish stories")]
    Forbidden,

    #[error("Title and story are required")]
    MissingFields,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateStoryUseCase {
    async fn execute(
        &self,
        actor: User,
        input: CreateStoryInput,
    ) -> Result<StoryRecord, CreateStoryError>;
}

pub struct CreateStoryService<R>
where
    R: StoryRepository,
{
    story_repository: R,
}

impl<R> CreateStoryService<R>
where
    R: StoryRepository,
{
    pub fn new(story_repository: R) -> Self {
        Self { story_repository }
    }
}

#[async_trait]
impl<R> ICreateStoryUseCase for CreateStoryService<R>
where
    R: StoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: User,
        input: CreateStoryInput,
    ) -> Result<StoryRecord, CreateStoryError> {
        if !policy::allows(&actor, Action::CreateStory) {
            return Err(CreateStoryError::Forbidden);
        }

        if input.title.trim().is_empty() || input.story.trim().is_empty() {
            return Err(CreateStoryError::MissingFields);
        }

        let data = CreateStoryData {
            author: actor.id,
            title: input.title,
            story: input.story,
            achievement: input.achievement,
            image_url: input.image_url,
        };

        self.story_repository
            .insert(data)
            .await
            .map_err(|e| match e {
                StoryRepositoryError::NotFound => {
                    CreateStoryError::RepositoryError("unexpected not found on insert".to_string())
                }
                StoryRepositoryError::DatabaseError(msg) => CreateStoryError::RepositoryError(msg),
            })
    }
}
