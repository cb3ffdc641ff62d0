use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::media::application::domain::validated_image::ValidatedImage;
use crate::media::application::ports::outgoing::image_store::{ImageStore, ImageStoreError};

const DEFAULT_BUCKET: &str = "alumni-connect-media";

fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        self.0.upload(bucket, object_name, content_type, data).await
    }
}

/// Stores validated images as public objects under
/// `{folder}/{uuid}.{ext}` and returns the storage.googleapis.com URL.
#[derive(Clone)]
pub struct GcsImageStore {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
}

impl GcsImageStore {
    /// Client is initialized lazily on first upload, so constructing the
    /// store never blocks startup on credentials.
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            client: Arc::new(OnceCell::new()),
        }
    }

    /// Bucket from `MEDIA_BUCKET`, falling back to the default.
    pub fn from_env() -> Self {
        let bucket = std::env::var("MEDIA_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        Self::new(bucket)
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, String> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(bucket: &str, client: Arc<dyn GcsClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            bucket: bucket.to_string(),
            client: Arc::new(once),
        }
    }
}

#[async_trait]
impl ImageStore for GcsImageStore {
    async fn store(
        &self,
        image: ValidatedImage,
        folder: &str,
    ) -> Result<String, ImageStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(ImageStoreError::UploadFailed)?;

        let object_name = format!("{}/{}.{}", folder, Uuid::new_v4(), image.format().extension());
        let content_type = image.format().content_type();

        client
            .upload(&self.bucket, &object_name, content_type, image.into_bytes())
            .await
            .map_err(ImageStoreError::UploadFailed)?;

        Ok(public_url(&self.bucket, &object_name))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS client config: {:?}", e);
                e.to_string()
            })?;

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{
            Media, UploadObjectRequest, UploadType,
        };

        let upload_type = UploadType::Simple(Media {
            name: object_name.to_string().into(),
            content_type: content_type.to_string().into(),
            content_length: Some(data.len() as u64),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
