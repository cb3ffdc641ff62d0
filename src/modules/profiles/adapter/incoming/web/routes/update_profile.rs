use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::media::application::domain::validated_image::ImageError;
use crate::profiles::application::use_cases::upsert_profile::{
    UpsertProfileError, UpsertProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every field is optional; absent ones keep their stored value. The page
/// sends the current position under its historical `designation` label.
#[derive(Deserialize)]
pub struct UpdateProfileDto {
    /// Renames the account itself, not just the profile.
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub designation: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Base64 photo payload, stored before the profile row is written.
    pub photo: Option<String>,
    /// URL of a photo already stored via the upload route.
    pub photo_url: Option<String>,
}

#[put("/api/profile")]
pub async fn update_profile_handler(
    auth_user: AuthenticatedUser,
    req: web::Json<UpdateProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let user_id = auth_user.user.id;

    let input = UpsertProfileInput {
        full_name: dto.full_name,
        bio: dto.bio,
        graduation_year: dto.graduation_year,
        department: dto.department,
        linkedin: dto.linkedin,
        github: dto.github,
        current_position: dto.designation,
        company: dto.company,
        location: dto.location,
        photo_url: dto.photo_url,
        photo_data: dto.photo,
    };

    match data.profiles.upsert.execute(auth_user.user, input).await {
        Ok(profile) => {
            info!(user_id = %user_id, profile_id = %profile.id, "Profile saved");
            ApiResponse::success(profile)
        }

        Err(UpsertProfileError::InvalidImage(image_err @ ImageError::TooLarge(_, _))) => {
            warn!(user_id = %user_id, error = %image_err, "Rejected oversized profile photo");
            ApiResponse::bad_request("MAX_SIZE_EXCEEDED", &image_err.to_string())
        }

        Err(UpsertProfileError::InvalidImage(image_err)) => {
            warn!(user_id = %user_id, error = %image_err, "Rejected unsupported profile photo");
            ApiResponse::bad_request("INVALID_TYPE", &image_err.to_string())
        }

        Err(UpsertProfileError::UploadFailed(ref e)) => {
            error!(user_id = %user_id, error = %e, "Profile photo upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Failed to store the profile photo")
        }

        Err(UpsertProfileError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}
