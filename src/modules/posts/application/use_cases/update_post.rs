use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy;
use crate::modules::posts::application::ports::outgoing::post_repository::{
    PostRecord, PostRepository, PostRepositoryError, UpdatePostData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Not the post owner")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdatePostUseCase {
    async fn execute(
        &self,
        actor: User,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, UpdatePostError>;
}

pub struct UpdatePostService<R>
where
    R: PostRepository,
{
    post_repository: R,
}

impl<R> UpdatePostService<R>
where
    R: PostRepository,
{
    pub fn new(post_repository: R) -> Self {
        Self { post_repository }
    }
}

#[async_trait]
impl<R> IUpdatePostUseCase for UpdatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: User,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, UpdatePostError> {
        // Existence before ownership: a missing post is a 404 for everyone,
        // including callers who would not have owned it.
        let owner_id = self
            .post_repository
            .owner_of(post_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(UpdatePostError::NotFound)?;

        if !policy::owns(&actor, owner_id) {
            return Err(UpdatePostError::NotOwner);
        }

        self.post_repository
            .update(post_id, data)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => UpdatePostError::NotFound,
                PostRepositoryError::DatabaseError(msg) => UpdatePostError::RepositoryError(msg),
            })
    }
}

fn map_repo_error(e: PostRepositoryError) -> UpdatePostError {
    match e {
        PostRepositoryError::NotFound => UpdatePostError::NotFound,
        PostRepositoryError::DatabaseError(msg) => UpdatePostError::RepositoryError(msg),
    }
}
