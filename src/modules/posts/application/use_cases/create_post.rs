use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::domain::validated_image::{ImageError, ValidatedImage};
use crate::media::application::ports::outgoing::image_store::{ImageStore, ImageStoreError};
use crate::modules::posts::application::ports::outgoing::post_repository::{
    CreatePostData, PostRecord, PostRepository, PostRepositoryError,
};

/// Object-storage folder for images attached to feed posts.
const POST_IMAGE_FOLDER: &str = "alumni_posts";

#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    /// URL of an image already stored via the upload route.
    pub image_url: Option<String>,
    /// Base64 payload to validate and store before the insert. Takes
    /// precedence over `image_url` when both are present.
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Title and content are required")]
    MissingFields,

    #[error(transparent)]
    InvalidImage(#[from] ImageError),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreatePostUseCase {
    async fn execute(
        &self,
        author_id: Uuid,
        input: CreatePostInput,
    ) -> Result<PostRecord, CreatePostError>;
}

pub struct CreatePostService<R, S>
where
    R: PostRepository,
    S: ImageStore,
{
    post_repository: R,
    image_store: S,
}

impl<R, S> CreatePostService<R, S>
where
    R: PostRepository,
    S: ImageStore,
{
    pub fn new(post_repository: R, image_store: S) -> Self {
        Self {
            post_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<R, S> ICreatePostUseCase for CreatePostService<R, S>
where
    R: PostRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        author_id: Uuid,
        input: CreatePostInput,
    ) -> Result<PostRecord, CreatePostError> {
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            return Err(CreatePostError::MissingFields);
        }

        // Image goes to storage first so a failed upload never leaves a post
        // row pointing at nothing.
        let image_url = match input.image_data {
            Some(data) => {
                let image = ValidatedImage::from_base64(&data)?;
                let url = self
                    .image_store
                    .store(image, POST_IMAGE_FOLDER)
                    .await
                    .map_err(|ImageStoreError::UploadFailed(msg)| {
                        CreatePostError::UploadFailed(msg)
                    })?;
                Some(url)
            }
            None => input.image_url,
        };

        self.post_repository
            .insert(CreatePostData {
                author_id,
                title: input.title,
                content: input.content,
                image_url,
            })
            .await
            .map_err(|e| match e {
                PostRepositoryError::DatabaseError(msg) => CreatePostError::RepositoryError(msg),
                PostRepositoryError::NotFound => CreatePostError::RepositoryError(
                    "unexpected not found while creating post".to_string(),
                ),
            })
    }
}
