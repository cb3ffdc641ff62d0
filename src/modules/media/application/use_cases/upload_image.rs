use async_trait::async_trait;

use crate::media::application::domain::validated_image::{ImageError, ValidatedImage};
use crate::media::application::ports::outgoing::image_store::{ImageStore, ImageStoreError};

/// Folder for images sent through the raw upload route. Post and profile
/// images pick their own folders in their use cases.
const UPLOAD_FOLDER: &str = "alumni_uploads";

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadImageError {
    #[error(transparent)]
    InvalidImage(#[from] ImageError),

    #[error("Upload failed: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait IUploadImageUseCase {
    /// Validates the bytes and stores them, returning the public URL.
    async fn execute(&self, bytes: Vec<u8>) -> Result<String, UploadImageError>;
}

pub struct UploadImageService<S>
where
    S: ImageStore,
{
    image_store: S,
}

impl<S> UploadImageService<S>
where
    S: ImageStore,
{
    pub fn new(image_store: S) -> Self {
        Self { image_store }
    }
}

#[async_trait]
impl<S> IUploadImageUseCase for UploadImageService<S>
where
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, bytes: Vec<u8>) -> Result<String, UploadImageError> {
        let image = ValidatedImage::from_bytes(bytes)?;

        self.image_store
            .store(image, UPLOAD_FOLDER)
            .await
            .map_err(|ImageStoreError::UploadFailed(msg)| UploadImageError::StoreFailed(msg))
    }
}
