use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::use_cases::list_pending_alumni::ListPendingAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The alumni review queue: accounts still waiting for a verdict on their
/// verification evidence.
#[get("/api/admin/alumni/pending")]
pub async fn get_pending_alumni_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.list_pending.execute(admin.user).await {
        Ok(pending) => ApiResponse::success(pending),

        Err(ListPendingAlumniError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Access denied. Admins only.")
        }

        Err(ListPendingAlumniError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list pending alumni");
            ApiResponse::internal_error()
        }
    }
}
