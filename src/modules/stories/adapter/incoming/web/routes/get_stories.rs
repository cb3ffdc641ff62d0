use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::stories::application::use_cases::get_stories::GetStoriesError;
use crate::AppState;

/// Public story wall, newest first.
#[get("/api/stories")]
pub async fn get_stories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stories.get_list.execute().await {
        Ok(stories) => ApiResponse::success(stories),

        Err(GetStoriesError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load stories");
            ApiResponse::internal_error()
        }
    }
}
