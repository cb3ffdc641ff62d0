use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::stories::application::ports::outgoing::story_repository::StoryRecord;
use crate::stories::application::use_cases::create_story::{CreateStoryError, CreateStoryInput};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateStoryDto {
    pub title: String,
    pub story: String,
    pub achievement: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
pub struct CreateStoryResponse {
    pub message: String,
    pub story: StoryRecord,
}

#[post("/api/stories")]
pub async fn create_story_handler(
    admin: AdminUser,
    req: web::Json<CreateStoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let actor_id = admin.user.id;

    let input = CreateStoryInput {
        title: dto.title,
        story: dto.story,
        achievement: dto.achievement,
        image_url: dto.image_url,
    };

    match data.stories.create.execute(admin.user, input).await {
        Ok(story) => {
            info!(user_id = %actor_id, story_id = %story.id, "Story published");
            ApiResponse::created(CreateStoryResponse {
                message: "Story created successfully".to_string(),
                story,
            })
        }

        Err(CreateStoryError::Forbidden) => {
            warn!(user_id = %actor_id, "Story creation refused");
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(err @ CreateStoryError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CreateStoryError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store story");
            ApiResponse::internal_error()
        }
    }
}
