use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::media::application::domain::validated_image::ImageError;
use crate::media::application::use_cases::upload_image::UploadImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

fn map_upload_error(err: UploadImageError) -> HttpResponse {
    match err {
        UploadImageError::InvalidImage(image_err @ ImageError::TooLarge(_, _)) => {
            warn!(error = %image_err, "Rejected oversized upload");
            ApiResponse::bad_request("MAX_SIZE_EXCEEDED", &image_err.to_string())
        }

        UploadImageError::InvalidImage(image_err) => {
            warn!(error = %image_err, "Rejected upload with unsupported payload");
            ApiResponse::bad_request("INVALID_TYPE", &image_err.to_string())
        }

        UploadImageError::StoreFailed(msg) => {
            error!("Image upload failed: {}", msg);
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Failed to store the uploaded image")
        }
    }
}

#[post("/api/upload")]
pub async fn upload_image_handler(
    user: AuthenticatedUser,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if body.is_empty() {
        return ApiResponse::bad_request("NO_FILE", "No file uploaded");
    }

    match data.media.upload.execute(body.to_vec()).await {
        Ok(url) => {
            info!(user_id = %user.user.id, "Image uploaded");
            ApiResponse::success(UploadImageResponse { image_url: url })
        }
        Err(err) => map_upload_error(err),
    }
}
