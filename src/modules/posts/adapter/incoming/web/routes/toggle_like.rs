use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::posts::application::use_cases::toggle_like::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct LikeResponse {
    pub likes: u64,
}

/// Flip the caller's like on a post and return the new total.
#[put("/api/posts/{id}/like")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.posts.toggle_like.execute(user.user.id, post_id).await {
        Ok(likes) => ApiResponse::success(LikeResponse { likes }),

        Err(ToggleLikeError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(ToggleLikeError::RepositoryError(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to toggle like");
            ApiResponse::internal_error()
        }
    }
}
