use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::use_cases::user_view::UserView;
use crate::modules::admin::application::use_cases::reject_alumni::RejectAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct RejectAlumniResponse {
    pub message: String,
    pub user: UserView,
}

/// Turns down a pending verification claim. The account stays a student and
/// the submitted evidence is cleared.
#[put("/api/admin/alumni/reject/{id}")]
pub async fn reject_alumni_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let actor_id = admin.user.id;

    match data.admin.reject_alumni.execute(admin.user, user_id).await {
        Ok(user) => {
            info!(admin_id = %actor_id, user_id = %user_id, "Alumni claim rejected");
            ApiResponse::success(RejectAlumniResponse {
                message: "Alumni request rejected".to_string(),
                user: UserView::from(&user),
            })
        }

        Err(RejectAlumniError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(RejectAlumniError::NotFound) => {
            ApiResponse::not_found("PENDING_ALUMNI_NOT_FOUND", "Pending alumni not found")
        }

        Err(RejectAlumniError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Failed to reject alumni claim");
            ApiResponse::internal_error()
        }
    }
}
