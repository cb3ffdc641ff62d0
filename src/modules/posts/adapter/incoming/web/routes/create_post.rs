use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::media::application::domain::validated_image::ImageError;
use crate::posts::application::use_cases::create_post::{CreatePostError, CreatePostInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    /// Base64 image payload, stored before the post row is written.
    pub image: Option<String>,
    /// URL of an image already stored via the upload route.
    pub image_url: Option<String>,
}

#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let author_id = user.user.id;

    let input = CreatePostInput {
        title: dto.title,
        content: dto.content,
        image_url: dto.image_url,
        image_data: dto.image,
    };

    match data.posts.create.execute(author_id, input).await {
        Ok(post) => {
            info!(user_id = %author_id, post_id = %post.id, "Post created");
            ApiResponse::created(post)
        }

        Err(err @ CreatePostError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CreatePostError::InvalidImage(image_err @ ImageError::TooLarge(_, _))) => {
            warn!(error = %image_err, "Rejected oversized post image");
            ApiResponse::bad_request("MAX_SIZE_EXCEEDED", &image_err.to_string())
        }

        Err(CreatePostError::InvalidImage(image_err)) => {
            warn!(error = %image_err, "Rejected post with unsupported image");
            ApiResponse::bad_request("INVALID_TYPE", &image_err.to_string())
        }

        Err(CreatePostError::UploadFailed(ref e)) => {
            error!(error = %e, "Post image upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Failed to store the post image")
        }

        Err(CreatePostError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store post");
            ApiResponse::internal_error()
        }
    }
}
