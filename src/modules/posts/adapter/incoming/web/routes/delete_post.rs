use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::posts::application::use_cases::delete_post::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct DeletePostResponse {
    pub message: String,
}

#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let actor_id = user.user.id;

    match data.posts.delete.execute(user.user, post_id).await {
        Ok(()) => {
            info!(user_id = %actor_id, post_id = %post_id, "Post deleted");
            ApiResponse::success(DeletePostResponse {
                message: "post removed".to_string(),
            })
        }

        Err(DeletePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(DeletePostError::NotOwner) => {
            warn!(user_id = %actor_id, post_id = %post_id, "Delete refused: not the author");
            ApiResponse::forbidden("NOT_POST_OWNER", "You do not own this post")
        }

        Err(DeletePostError::RepositoryError(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}
