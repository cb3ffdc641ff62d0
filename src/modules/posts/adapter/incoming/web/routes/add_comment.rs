use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::posts::application::use_cases::comment_on_post::CommentOnPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct AddCommentDto {
    pub text: String,
}

/// Append a comment. Responds with the post's full comment thread so the
/// client can replace its local copy in one step.
#[post("/api/posts/{id}/comments")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddCommentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let author_id = user.user.id;

    match data
        .posts
        .comment
        .execute(author_id, post_id, req.into_inner().text)
        .await
    {
        Ok(comments) => {
            info!(user_id = %author_id, post_id = %post_id, "Comment added");
            ApiResponse::created(comments)
        }

        Err(err @ CommentOnPostError::EmptyText) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(CommentOnPostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(CommentOnPostError::RepositoryError(ref e)) => {
            error!(post_id = %post_id, error = %e, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}
