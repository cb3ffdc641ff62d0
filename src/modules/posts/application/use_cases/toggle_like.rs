use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::posts::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Flips the caller's like on a post and reports the resulting count.
#[async_trait]
pub trait IToggleLikeUseCase {
    async fn execute(&self, user_id: Uuid, post_id: Uuid) -> Result<u64, ToggleLikeError>;
}

pub struct ToggleLikeService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> IToggleLikeUseCase for ToggleLikeService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, post_id: Uuid) -> Result<u64, ToggleLikeError> {
        let exists = self
            .post_repository
            .owner_of(post_id)
            .await
            .map_err(map_repo_error)?
            .is_some();
        if !exists {
            return Err(ToggleLikeError::PostNotFound);
        }

        self.post_repository
            .toggle_like(post_id, user_id)
            .await
            .map_err(map_repo_error)
    }
}

fn map_repo_error(e: PostRepositoryError) -> ToggleLikeError {
    match e {
        PostRepositoryError::NotFound => ToggleLikeError::PostNotFound,
        PostRepositoryError::DatabaseError(msg) => ToggleLikeError::RepositoryError(msg),
    }
}
