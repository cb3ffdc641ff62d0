use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy;
use crate::modules::posts::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Not the post owner")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Author-side removal. Admin moderation deletes go through the admin
/// module instead and skip the ownership check.
#[async_trait]
pub trait IDeletePostUseCase {
    async fn execute(&self, actor: User, post_id: Uuid) -> Result<(), DeletePostError>;
}

pub struct DeletePostService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> DeletePostService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> IDeletePostUseCase for DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, actor: User, post_id: Uuid) -> Result<(), DeletePostError> {
        let owner_id = self
            .post_repository
            .owner_of(post_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(DeletePostError::NotFound)?;

        if !policy::owns(&actor, owner_id) {
            return Err(DeletePostError::NotOwner);
        }

        self.post_repository
            .delete(post_id)
            .await
            .map_err(map_repo_error)
    }
}

fn map_repo_error(e: PostRepositoryError) -> DeletePostError {
    match e {
        PostRepositoryError::NotFound => DeletePostError::NotFound,
        PostRepositoryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
    }
}
