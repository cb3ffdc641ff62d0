use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::policy::{self, Action};
use crate::modules::posts::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ModeratePostError {
    #[error("Only admins may moderate posts")]
    Forbidden,

    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IModeratePostUseCase {
    async fn execute(&self, actor: User, post_id: Uuid) -> Result<(), ModeratePostError>;
}

/// Removes any post regardless of author. Ownership never enters into it;
/// this is the moderation path, not the author's own delete.
pub struct ModeratePostService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> ModeratePostService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> IModeratePostUseCase for ModeratePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, actor: User, post_id: Uuid) -> Result<(), ModeratePostError> {
        if !policy::allows(&actor, Action::ModeratePost) {
            return Err(ModeratePostError::Forbidden);
        }

        self.post_repository
            .delete(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => ModeratePostError::NotFound,
                PostRepositoryError::DatabaseError(msg) => ModeratePostError::RepositoryError(msg),
            })
    }
}
