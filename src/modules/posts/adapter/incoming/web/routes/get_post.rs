use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::posts::application::use_cases::get_post::GetPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/posts/{id}")]
pub async fn get_post_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let post_id = path.into_inner();

    match data.posts.get_single.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),

        Err(GetPostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),

        Err(GetPostError::QueryFailed(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}
