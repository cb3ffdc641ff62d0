use actix_web::{get, web, Responder};
use tracing::error;

use crate::posts::application::use_cases::get_posts::GetPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public feed, newest first. No auth so the landing page can render it.
#[get("/api/posts")]
pub async fn get_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.posts.get_list.execute().await {
        Ok(posts) => ApiResponse::success(posts),

        Err(GetPostsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load the post feed");
            ApiResponse::internal_error()
        }
    }
}
