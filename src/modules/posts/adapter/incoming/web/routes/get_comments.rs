use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::posts::application::use_cases::get_comments::GetCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/posts/{id}/comments")]
pub async fn get_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.posts.get_comments.execute(post_id).await {
        Ok(comments) => ApiResponse::success(comments),

        Err(GetCommentsError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(GetCommentsError::QueryFailed(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to load comments");
            ApiResponse::internal_error()
        }
    }
}
