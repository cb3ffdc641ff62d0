use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

/// Removes an account. Posts, comments, likes, the profile and job postings
/// cascade away with it; events, donations and stories keep their rows with
/// the author column nulled.
#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.delete_user.execute(admin.user, user_id).await {
        Ok(()) => {
            info!(admin_id = %actor_id, user_id = %user_id, "User deleted");
            ApiResponse::success(DeleteUserResponse {
                message: "User deleted successfully".to_string(),
            })
        }

        Err(DeleteUserError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
