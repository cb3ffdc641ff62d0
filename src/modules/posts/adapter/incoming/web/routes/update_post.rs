use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::posts::application::ports::outgoing::post_repository::UpdatePostData;
use crate::posts::application::use_cases::update_post::UpdatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// Edit a post. Only the author may edit; admins use the moderation
/// endpoints instead of editing on someone's behalf.
#[put("/api/posts/{id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let actor_id = user.user.id;
    let dto = req.into_inner();

    let changes = UpdatePostData {
        title: dto.title,
        content: dto.content,
        image_url: dto.image_url,
    };

    match data.posts.update.execute(user.user, post_id, changes).await {
        Ok(post) => {
            info!(user_id = %actor_id, post_id = %post_id, "Post updated");
            ApiResponse::success(post)
        }

        Err(UpdatePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(UpdatePostError::NotOwner) => {
            warn!(user_id = %actor_id, post_id = %post_id, "Edit refused: not the author");
            ApiResponse::forbidden("NOT_POST_OWNER", "You do not own this post")
        }

        Err(UpdatePostError::RepositoryError(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to update post");
            ApiResponse::internal_error()
        }
    }
}
