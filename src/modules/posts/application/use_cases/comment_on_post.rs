use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::posts::application::ports::outgoing::post_query::{
    CommentView, PostQuery, PostQueryError,
};
use crate::modules::posts::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentOnPostError {
    #[error("Comment text is required")]
    EmptyText,

    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Appends a comment and returns the post's full comment list, so the feed
/// can swap its thread in place without a second request.
#[async_trait]
pub trait ICommentOnPostUseCase {
    async fn execute(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        text: String,
    ) -> Result<Vec<CommentView>, CommentOnPostError>;
}

pub struct CommentOnPostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    post_repository: R,
    post_query: Q,
}

impl<R, Q> CommentOnPostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(post_repository: R, post_query: Q) -> Self {
        Self {
            post_repository,
            post_query,
        }
    }
}

#[async_trait]
impl<R, Q> ICommentOnPostUseCase for CommentOnPostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        text: String,
    ) -> Result<Vec<CommentView>, CommentOnPostError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(CommentOnPostError::EmptyText);
        }

        let exists = self
            .post_repository
            .owner_of(post_id)
            .await
            .map_err(map_repo_error)?
            .is_some();
        if !exists {
            return Err(CommentOnPostError::PostNotFound);
        }

        self.post_repository
            .add_comment(post_id, author_id, text)
            .await
            .map_err(map_repo_error)?;

        self.post_query
            .list_comments(post_id)
            .await
            .map_err(|e| match e {
                PostQueryError::NotFound => CommentOnPostError::PostNotFound,
                PostQueryError::DatabaseError(msg) => CommentOnPostError::RepositoryError(msg),
            })
    }
}

fn map_repo_error(e: PostRepositoryError) -> CommentOnPostError {
    match e {
        PostRepositoryError::NotFound => CommentOnPostError::PostNotFound,
        PostRepositoryError::DatabaseError(msg) => CommentOnPostError::RepositoryError(msg),
    }
}
