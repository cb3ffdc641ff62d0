use async_trait::async_trait;

use crate::media::application::domain::validated_image::ValidatedImage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

/// Port for persisting validated images in object storage.
///
/// `folder` becomes the object key prefix (`alumni_posts`, `alumni_uploads`).
/// Implementations return the public URL of the stored object.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(
        &self,
        image: ValidatedImage,
        folder: &str,
    ) -> Result<String, ImageStoreError>;
}
