use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::stories::application::use_cases::delete_story::DeleteStoryError;
use crate::AppState;

#[derive(Serialize)]
pub struct DeleteStoryResponse {
    pub message: String,
}

#[delete("/api/stories/{id}")]
pub async fn delete_story_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let story_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.stories.delete.execute(admin.user, story_id).await {
        Ok(()) => {
            info!(user_id = %actor_id, story_id = %story_id, "Story deleted");
            ApiResponse::success(DeleteStoryResponse {
                message: "Story deleted successfully".to_string(),
            })
        }

        Err(DeleteStoryError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(DeleteStoryError::NotFound) => {
            ApiResponse::not_found("STORY_NOT_FOUND", "Story not found")
        }

        Err(DeleteStoryError::RepositoryError(ref e)) => {
            error!(story_id = %story_id, error = %e, "Failed to delete story");
            ApiResponse::internal_error()
        }
    }
}
