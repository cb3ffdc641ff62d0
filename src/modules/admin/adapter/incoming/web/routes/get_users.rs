use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::list_users::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every account on the platform, for the admin user table.
#[get("/api/admin/users")]
pub async fn get_users_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.list_users.execute(admin.user).await {
        Ok(users) => ApiResponse::success(users),

        Err(ListUsersError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(ListUsersError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
