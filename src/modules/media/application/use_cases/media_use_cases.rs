use std::sync::Arc;

use super::upload_image::IUploadImageUseCase;

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn IUploadImageUseCase + Send + Sync>,
}
