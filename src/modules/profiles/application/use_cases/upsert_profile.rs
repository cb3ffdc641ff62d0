use async_trait::async_trait;

use crate::media::application::domain::validated_image::{ImageError, ValidatedImage};
use crate::media::application::ports::outgoing::image_store::{ImageStore, ImageStoreError};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::UserRepository;
use crate::modules::profiles::application::ports::outgoing::profile_repository::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError, UpsertProfileData,
};

/// Object-storage folder for profile photos.
const PROFILE_PHOTO_FOLDER: &str = "alumni_uploads";

#[derive(Debug, Clone, Default)]
pub struct UpsertProfileInput {
    /// Renames the account itself, not just the profile.
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub current_position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// URL of a photo already stored via the upload route.
    pub photo_url: Option<String>,
    /// Base64 payload to validate and store before the write. Takes
    /// precedence over `photo_url` when both are present.
    pub photo_data: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertProfileError {
    #[error(transparent)]
    InvalidImage(#[from] ImageError),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpsertProfileUseCase {
    async fn execute(
        &self,
        user: User,
        input: UpsertProfileInput,
    ) -> Result<ProfileRecord, UpsertProfileError>;
}

pub struct UpsertProfileService<R, U, S>
where
    R: ProfileRepository,
    U: UserRepository,
    S: ImageStore,
{
    profile_repository: R,
    user_repository: U,
    image_store: S,
}

impl<R, U, S> UpsertProfileService<R, U, S>
where
    R: ProfileRepository,
    U: UserRepository,
    S: ImageStore,
{
    pub fn new(profile_repository: R, user_repository: U, image_store: S) -> Self {
        Self {
            profile_repository,
            user_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<R, U, S> IUpsertProfileUseCase for UpsertProfileService<R, U, S>
where
    R: ProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        user: User,
        input: UpsertProfileInput,
    ) -> Result<ProfileRecord, UpsertProfileError> {
        // Photo goes to storage first so a failed upload never half-applies
        // the update.
        let photo = match input.photo_data {
            Some(data) => {
                let image = ValidatedImage::from_base64(&data)?;
                let url = self
                    .image_store
                    .store(image, PROFILE_PHOTO_FOLDER)
                    .await
                    .map_err(|ImageStoreError::UploadFailed(msg)| {
                        UpsertProfileError::UploadFailed(msg)
                    })?;
                Some(url)
            }
            None => input.photo_url,
        };

        let new_name = input
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if let Some(name) = new_name {
            self.user_repository
                .update_name(user.id, name)
                .await
                .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))?;
        }

        self.profile_repository
            .upsert(
                user.id,
                UpsertProfileData {
                    bio: input.bio,
                    graduation_year: input.graduation_year,
                    department: input.department,
                    linkedin: input.linkedin,
                    github: input.github,
                    current_position: input.current_position,
                    company: input.company,
                    location: input.location,
                    photo,
                },
            )
            .await
            .map_err(|ProfileRepositoryError::DatabaseError(msg)| {
                UpsertProfileError::RepositoryError(msg)
            })
    }
}
